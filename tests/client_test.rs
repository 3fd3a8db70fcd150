// Standard library
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// 3rd party crates
use async_trait::async_trait;
use futures::future::join_all;
use thiserror::Error;
use tokio::time::{Duration, Instant};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use leaky_client::{HttpTransport, LeakyClient, RateLimitError};

fn init_tracing() {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StubRequest {
    method: &'static str,
    url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StubResponse {
    status: u16,
    body: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Stub transport refused {0}")]
struct StubError(String);

/// In-memory transport: answers every dispatch with a canned response (or a
/// canned error) and counts what reached it.
#[derive(Clone, Default)]
struct StubTransport {
    fail: bool,
    dispatches: Arc<AtomicUsize>,
    idle_closes: Arc<AtomicUsize>,
}

impl StubTransport {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn respond(&self, line: String) -> Result<StubResponse, StubError> {
        self.dispatches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StubError(line));
        }
        Ok(StubResponse {
            status: 200,
            body: line,
        })
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    type Request = StubRequest;
    type Body = String;
    type Response = StubResponse;
    type Error = StubError;

    async fn execute(&self, request: StubRequest) -> Result<StubResponse, StubError> {
        self.respond(format!("{} {}", request.method, request.url))
    }

    async fn get(&self, url: &str) -> Result<StubResponse, StubError> {
        self.respond(format!("GET {url}"))
    }

    async fn head(&self, url: &str) -> Result<StubResponse, StubError> {
        self.respond(format!("HEAD {url}"))
    }

    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<StubResponse, StubError> {
        self.respond(format!("POST {url} {content_type} {body}"))
    }

    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<StubResponse, StubError> {
        self.respond(format!("POST {url} form with {} pairs", form.len()))
    }

    fn close_idle_connections(&self) {
        self.idle_closes.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_zero_rate_is_rejected() {
    let result = LeakyClient::with_transport(0, StubTransport::default());

    assert!(matches!(result.err(), Some(RateLimitError::InvalidRate(0))));
}

#[tokio::test]
async fn test_responses_pass_through_unmodified() {
    init_tracing();
    let client = LeakyClient::with_transport(100, StubTransport::default()).unwrap();

    let response = client.get("https://example.com/get").await.unwrap();
    assert_eq!(
        response,
        StubResponse {
            status: 200,
            body: "GET https://example.com/get".to_string(),
        }
    );

    let response = client.head("https://example.com/head").await.unwrap();
    assert_eq!(response.body, "HEAD https://example.com/head");

    let body = serde_json::json!({ "leaky_client": "post" }).to_string();
    let response = client
        .post("https://example.com/post", "application/json", body)
        .await
        .unwrap();
    assert_eq!(
        response.body,
        "POST https://example.com/post application/json {\"leaky_client\":\"post\"}"
    );

    let response = client
        .post_form("https://example.com/post", &[("leaky_client", "post")])
        .await
        .unwrap();
    assert_eq!(response.body, "POST https://example.com/post form with 1 pairs");
}

#[tokio::test]
async fn test_execute_passes_prepared_request_through() {
    let client = LeakyClient::with_transport(100, StubTransport::default()).unwrap();

    let request = StubRequest {
        method: "GET",
        url: "https://example.com/prepared".to_string(),
    };
    let response = client.execute(request).await.unwrap();

    assert_eq!(response.body, "GET https://example.com/prepared");
}

#[tokio::test]
async fn test_errors_pass_through_verbatim() {
    let client = LeakyClient::with_transport(100, StubTransport::failing()).unwrap();

    let err = client.get("https://example.com/get").await.unwrap_err();

    assert_eq!(err, StubError("GET https://example.com/get".to_string()));
}

#[tokio::test]
async fn test_concurrent_gets_are_paced() {
    init_tracing();
    // rate 4 = one admission every 250ms
    let client = LeakyClient::with_transport(4, StubTransport::default()).unwrap();

    let start = Instant::now();
    let tasks: Vec<_> = (0..2)
        .map(|_| {
            // Clones pace against the same schedule as the original.
            let client = client.clone();
            tokio::spawn(async move {
                let response = client.get("https://example.com/get").await.unwrap();
                assert_eq!(response.status, 200);
            })
        })
        .collect();
    for result in join_all(tasks).await {
        result.unwrap();
    }
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(240),
        "Two dispatches at rate 4 should span at least ~250ms, got {:?}",
        elapsed
    );
    assert!(elapsed < Duration::from_millis(600));
}

#[tokio::test]
async fn test_concurrent_posts_are_paced() {
    let client = LeakyClient::with_transport(4, StubTransport::default()).unwrap();
    let body = serde_json::json!({ "leaky_client": "post" }).to_string();

    let start = Instant::now();
    let tasks: Vec<_> = (0..2)
        .map(|_| {
            let client = client.clone();
            let body = body.clone();
            tokio::spawn(async move {
                let response = client
                    .post("https://example.com/post", "application/json", body)
                    .await
                    .unwrap();
                assert_eq!(response.status, 200);
            })
        })
        .collect();
    for result in join_all(tasks).await {
        result.unwrap();
    }

    assert!(start.elapsed() >= Duration::from_millis(240));
}

#[tokio::test]
async fn test_concurrent_form_posts_are_paced() {
    let client = LeakyClient::with_transport(4, StubTransport::default()).unwrap();

    let start = Instant::now();
    let tasks: Vec<_> = (0..2)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                let response = client
                    .post_form("https://example.com/post", &[("leaky_client", "post")])
                    .await
                    .unwrap();
                assert_eq!(response.status, 200);
            })
        })
        .collect();
    for result in join_all(tasks).await {
        result.unwrap();
    }

    assert!(start.elapsed() >= Duration::from_millis(240));
}

#[tokio::test]
async fn test_close_idle_connections_skips_the_limiter() {
    let stub = StubTransport::default();
    let probe = stub.clone();
    // rate 1 = the next admission after a dispatch is a full second away
    let client = LeakyClient::with_transport(1, stub).unwrap();

    client.get("https://example.com/get").await.unwrap();

    let start = Instant::now();
    client.close_idle_connections();

    assert!(
        start.elapsed() < Duration::from_millis(50),
        "Teardown waited on the limiter"
    );
    assert_eq!(probe.idle_closes.load(Ordering::SeqCst), 1);
    // Teardown is not a dispatch.
    assert_eq!(probe.dispatches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_default_transport_constructs() {
    let client = LeakyClient::new(4);

    assert!(client.is_ok());
}
