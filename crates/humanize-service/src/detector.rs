use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use humanize_core::Detection;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ServiceError;

const PREDICT_PATH: &str = "/v2/predict/text";

/// Which detector backend was selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    Live,
    Mock,
}

impl DetectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMode::Live => "live",
            DetectionMode::Mock => "mock",
        }
    }
}

/// Scores a text for how machine-generated it looks.
#[async_trait]
pub trait Detector: Send + Sync {
    fn mode(&self) -> DetectionMode;
    async fn score(&self, text: &str, is_rewritten: bool) -> Result<Detection, ServiceError>;
}

/// Pick the detector once at startup: live when a credential is configured,
/// synthetic scores otherwise. The choice is not re-checked per request.
pub fn create_detector(
    base_url: &str,
    api_key: Option<String>,
    timeout: Duration,
) -> Arc<dyn Detector> {
    match api_key {
        Some(key) => Arc::new(GptZeroDetector::new(base_url, key, timeout)),
        None => {
            info!("no detector API key configured, using mock detection");
            Arc::new(MockDetector)
        }
    }
}

/// Synthetic scores so the demo loop shows "improvement" without a real
/// detector: rewritten text lands in [5,30), presumed-original in [60,90).
/// No detection accuracy is implied.
pub struct MockDetector;

#[async_trait]
impl Detector for MockDetector {
    fn mode(&self) -> DetectionMode {
        DetectionMode::Mock
    }

    async fn score(&self, _text: &str, is_rewritten: bool) -> Result<Detection, ServiceError> {
        let mut rng = rand::thread_rng();
        let ai_probability = if is_rewritten {
            rng.gen_range(5..30)
        } else {
            rng.gen_range(60..90)
        };
        Ok(Detection {
            ai_probability,
            mocked: true,
        })
    }
}

/// Live detector backed by the GPTZero prediction endpoint.
pub struct GptZeroDetector {
    base_url: String,
    api_key: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl GptZeroDetector {
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Detector for GptZeroDetector {
    fn mode(&self) -> DetectionMode {
        DetectionMode::Live
    }

    async fn score(&self, text: &str, _is_rewritten: bool) -> Result<Detection, ServiceError> {
        let body = PredictRequest { document: text };
        let resp = self
            .client
            .post(format!("{}{PREDICT_PATH}", self.base_url))
            .header("x-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Internal(format!("detection request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = error_detail(resp).await;
            warn!("detection API returned {status}: {detail}");
            return Err(ServiceError::Upstream(format!(
                "detection API error ({status}): {detail}"
            )));
        }

        let prediction: PredictResponse = resp
            .json()
            .await
            .map_err(|e| ServiceError::Internal(format!("decode prediction: {e}")))?;

        Ok(Detection {
            ai_probability: extract_probability(&prediction),
            mocked: false,
        })
    }
}

/// Reported generated-probability fraction × 100, rounded to the nearest
/// integer; 0 when the field is missing.
fn extract_probability(resp: &PredictResponse) -> u8 {
    let prob = resp
        .documents
        .first()
        .and_then(|d| d.completely_generated_prob)
        .unwrap_or(0.0);
    (prob * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Best-effort error message from a failed upstream body
/// (`{"error": ...}` on this API).
async fn error_detail(resp: reqwest::Response) -> String {
    let body = resp.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"].as_str().map(String::from))
        .unwrap_or(body)
}

// --- API types ---

#[derive(Serialize)]
struct PredictRequest<'a> {
    document: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    documents: Vec<DocumentScore>,
}

#[derive(Debug, Deserialize)]
struct DocumentScore {
    #[serde(default)]
    completely_generated_prob: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_scores_rewritten_in_low_band() {
        let detector = MockDetector;
        for _ in 0..200 {
            let d = detector.score("some text", true).await.unwrap();
            assert!((5..30).contains(&d.ai_probability), "got {}", d.ai_probability);
            assert!(d.mocked);
        }
    }

    #[tokio::test]
    async fn mock_scores_original_in_high_band() {
        let detector = MockDetector;
        for _ in 0..200 {
            let d = detector.score("some text", false).await.unwrap();
            assert!((60..90).contains(&d.ai_probability), "got {}", d.ai_probability);
            assert!(d.mocked);
        }
    }

    #[test]
    fn mock_mode_is_mock() {
        assert_eq!(MockDetector.mode(), DetectionMode::Mock);
    }

    #[test]
    fn create_detector_selects_by_credential() {
        let timeout = Duration::from_secs(1);
        let live = create_detector("http://localhost", Some("key".into()), timeout);
        assert_eq!(live.mode(), DetectionMode::Live);
        let mock = create_detector("http://localhost", None, timeout);
        assert_eq!(mock.mode(), DetectionMode::Mock);
    }

    #[test]
    fn probability_from_fraction() {
        let resp: PredictResponse = serde_json::from_str(
            r#"{"documents": [{"completely_generated_prob": 0.73}]}"#,
        )
        .unwrap();
        assert_eq!(extract_probability(&resp), 73);
    }

    #[test]
    fn probability_rounds_to_nearest() {
        let resp: PredictResponse = serde_json::from_str(
            r#"{"documents": [{"completely_generated_prob": 0.996}]}"#,
        )
        .unwrap();
        assert_eq!(extract_probability(&resp), 100);
    }

    #[test]
    fn missing_probability_defaults_to_zero() {
        let resp: PredictResponse =
            serde_json::from_str(r#"{"documents": [{"version": "v2"}]}"#).unwrap();
        assert_eq!(extract_probability(&resp), 0);
    }

    #[test]
    fn missing_documents_defaults_to_zero() {
        let resp: PredictResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_probability(&resp), 0);
    }

    #[test]
    fn predict_request_wire_shape() {
        let body = PredictRequest { document: "sample" };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["document"], "sample");
    }
}
