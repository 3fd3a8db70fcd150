// 3rd party crates
use async_trait::async_trait;

/// Core trait that an HTTP transport must implement to be paced by a
/// [`LeakyClient`](super::types::LeakyClient).
///
/// The transport owns everything about actually speaking HTTP: request
/// building, connection pooling, TLS, redirects, timeouts. The decorator
/// only decides *when* a dispatch may start.
///
/// # Implementation Requirements
///
/// Implementors must provide:
/// - Request, body and response types for their wire vocabulary
/// - An error type covering everything a dispatch can fail with
/// - The dispatch operations below, each performing one exchange
/// - An idle-connection teardown hook (a no-op where the underlying
///   pool offers none)
///
/// # Example Implementation
///
/// ```rust
/// # use async_trait::async_trait;
/// # use leaky_client::HttpTransport;
/// struct RecordingTransport;
///
/// #[async_trait]
/// impl HttpTransport for RecordingTransport {
///     type Request = String;
///     type Body = String;
///     type Response = String;
///     type Error = std::io::Error;
///
///     async fn execute(&self, request: String) -> Result<String, Self::Error> {
///         Ok(format!("handled {request}"))
///     }
///
///     async fn get(&self, url: &str) -> Result<String, Self::Error> {
///         Ok(format!("GET {url}"))
///     }
///
///     async fn head(&self, url: &str) -> Result<String, Self::Error> {
///         Ok(format!("HEAD {url}"))
///     }
///
///     async fn post(
///         &self,
///         url: &str,
///         content_type: &str,
///         body: String,
///     ) -> Result<String, Self::Error> {
///         Ok(format!("POST {url} as {content_type}: {body}"))
///     }
///
///     async fn post_form(
///         &self,
///         url: &str,
///         form: &[(&str, &str)],
///     ) -> Result<String, Self::Error> {
///         Ok(format!("POST {url} with {} pairs", form.len()))
///     }
///
///     fn close_idle_connections(&self) {}
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// A fully prepared request, ready to dispatch.
    type Request: Send;

    /// The payload type accepted by [`post`](Self::post).
    type Body: Send;

    /// Whatever the transport yields for a completed exchange.
    type Response: Send;

    /// The error type for this transport.
    ///
    /// Errors travel through the decorator untouched, so this type is
    /// exactly what callers of the wrapped client observe on failure.
    type Error: std::error::Error + Send + Sync;

    /// Dispatch a prepared request.
    async fn execute(&self, request: Self::Request) -> Result<Self::Response, Self::Error>;

    /// Issue a GET to the specified URL.
    async fn get(&self, url: &str) -> Result<Self::Response, Self::Error>;

    /// Issue a HEAD to the specified URL.
    async fn head(&self, url: &str) -> Result<Self::Response, Self::Error>;

    /// Issue a POST to the specified URL with the given content type and body.
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Self::Body,
    ) -> Result<Self::Response, Self::Error>;

    /// Issue a POST to the specified URL with form-urlencoded key/value pairs.
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<Self::Response, Self::Error>;

    /// Tear down connections sitting idle in the transport's pool.
    ///
    /// Administrative, not a network dispatch; the decorator forwards this
    /// without consulting the limiter.
    fn close_idle_connections(&self);
}
