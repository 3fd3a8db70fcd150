// Standard library
use std::sync::Arc;

// 3rd party crates
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Body, Client, Request, Response};
use tracing::trace;

// Project imports
use crate::limiter::{LeakyBucketRateLimiter, RateLimitConfig, RateLimitError};

// Current module imports
use super::traits::HttpTransport;
use super::types::LeakyClient;

impl LeakyClient {
    /// Create a new client handling at most `requests_per_second` dispatches
    /// per second through a default-configured [`reqwest::Client`].
    pub fn new(requests_per_second: u32) -> Result<Self, RateLimitError> {
        Self::with_transport(requests_per_second, Client::new())
    }
}

impl<T> LeakyClient<T>
where
    T: HttpTransport,
{
    /// Create a new client pacing dispatches through the given transport.
    pub fn with_transport(requests_per_second: u32, transport: T) -> Result<Self, RateLimitError> {
        Self::from_config(RateLimitConfig::new(requests_per_second), transport)
    }

    /// Create a new client from a full pacing configuration.
    pub fn from_config(config: RateLimitConfig, transport: T) -> Result<Self, RateLimitError> {
        let limiter = LeakyBucketRateLimiter::from_config(config)?;

        Ok(Self {
            limiter: Arc::new(limiter),
            transport,
        })
    }

    /// Dispatch a prepared request using the inner transport.
    pub async fn execute(&self, request: T::Request) -> Result<T::Response, T::Error> {
        self.limiter.take().await;
        trace!("Dispatching prepared request");
        self.transport.execute(request).await
    }

    /// Issue a GET to the specified URL.
    pub async fn get(&self, url: &str) -> Result<T::Response, T::Error> {
        self.limiter.take().await;
        trace!(url, "Dispatching GET");
        self.transport.get(url).await
    }

    /// Issue a HEAD to the specified URL.
    pub async fn head(&self, url: &str) -> Result<T::Response, T::Error> {
        self.limiter.take().await;
        trace!(url, "Dispatching HEAD");
        self.transport.head(url).await
    }

    /// Issue a POST to the specified URL with the given content type and body.
    pub async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: T::Body,
    ) -> Result<T::Response, T::Error> {
        self.limiter.take().await;
        trace!(url, content_type, "Dispatching POST");
        self.transport.post(url, content_type, body).await
    }

    /// Issue a POST to the specified URL with form-urlencoded key/value pairs.
    pub async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<T::Response, T::Error> {
        self.limiter.take().await;
        trace!(url, pairs = form.len(), "Dispatching form POST");
        self.transport.post_form(url, form).await
    }

    /// Tear down connections sitting idle in the transport's pool.
    ///
    /// Administrative, so it does not consume an admission slot and never
    /// delays, even while dispatches are queued on the limiter.
    pub fn close_idle_connections(&self) {
        self.transport.close_idle_connections();
    }
}

#[async_trait]
impl HttpTransport for Client {
    type Request = Request;
    type Body = Body;
    type Response = Response;
    type Error = reqwest::Error;

    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        Client::execute(self, request).await
    }

    async fn get(&self, url: &str) -> Result<Response, reqwest::Error> {
        Client::get(self, url).send().await
    }

    async fn head(&self, url: &str) -> Result<Response, reqwest::Error> {
        Client::head(self, url).send().await
    }

    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Body,
    ) -> Result<Response, reqwest::Error> {
        Client::post(self, url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
    }

    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Response, reqwest::Error> {
        Client::post(self, url).form(form).send().await
    }

    /// reqwest manages its pool internally and reaps idle sockets on its
    /// own idle timeout; there is no manual teardown hook to forward to.
    fn close_idle_connections(&self) {}
}
