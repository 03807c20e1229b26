mod detector;
mod rewriter;

pub use detector::{create_detector, DetectionMode, Detector, GptZeroDetector, MockDetector};
pub use rewriter::{OpenAiRewriter, Rewriter, REWRITE_FALLBACK};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}
