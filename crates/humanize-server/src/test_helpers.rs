//! Backends and server plumbing for exercising the router without real
//! upstream services. Used by the unit tests in `routes/` and the
//! integration tests under `tests/`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use humanize_core::Detection;
use humanize_service::{DetectionMode, Detector, Rewriter, ServiceError};
use tokio::net::TcpListener;

use crate::routes::{build_router, InnerAppState};

/// Build a router over the given backends.
pub fn test_router(rewriter: Arc<dyn Rewriter>, detector: Arc<dyn Detector>) -> Router {
    build_router(Arc::new(InnerAppState { rewriter, detector }))
}

/// Rewriter that never reaches the network: echoes the input back with a
/// fixed prefix and counts how often it was called.
pub struct EchoRewriter {
    calls: AtomicUsize,
}

impl EchoRewriter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Rewriter for EchoRewriter {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn rewrite(&self, _instruction: &str, text: &str) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("Echo: {text}"))
    }
}

/// Detector that returns a fixed probability and records the rewritten hint.
pub struct StubDetector {
    probability: u8,
    calls: AtomicUsize,
    last_hint: Mutex<Option<bool>>,
}

impl StubDetector {
    pub fn new(probability: u8) -> Arc<Self> {
        Arc::new(Self {
            probability,
            calls: AtomicUsize::new(0),
            last_hint: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_hint(&self) -> Option<bool> {
        *self.last_hint.lock().unwrap()
    }
}

#[async_trait]
impl Detector for StubDetector {
    fn mode(&self) -> DetectionMode {
        DetectionMode::Live
    }

    async fn score(&self, _text: &str, is_rewritten: bool) -> Result<Detection, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_hint.lock().unwrap() = Some(is_rewritten);
        Ok(Detection {
            ai_probability: self.probability,
            mocked: false,
        })
    }
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn `router` on a random port. Returns the TestServer with the
/// `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(router: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
