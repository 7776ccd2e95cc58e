//! HTTP transport capability
//!
//! The query service does not own an HTTP client. It acquires a transport
//! per call through [`TransportProvider`], uses it for exactly one GET, and
//! drops it on every exit path. The default provider hands out handles over
//! one lazily built shared [`reqwest::Client`]; tests substitute stub
//! providers to run without the network.

use std::sync::LazyLock;

use async_trait::async_trait;
use tracing::trace;

use crate::Result;

/// Logical client name this crate passes to [`TransportProvider::acquire`]
pub const CLIENT_NAME: &str = "OEIS";

/// A fully read HTTP reply: status code plus body text
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl HttpReply {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-call HTTP GET capability
///
/// A transport is scoped to one query call; issuing the request and reading
/// the body are the only suspension points of that call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request and read the full response body
    async fn get(&self, url: &str) -> Result<HttpReply>;
}

/// Capability handing out transports keyed by a logical client name
///
/// Must be safe for concurrent acquisition; the query service acquires a
/// fresh transport for every call and never caches one across calls.
pub trait TransportProvider: Send + Sync {
    /// Acquire a transport scoped to one query call
    fn acquire(&self, name: &str) -> Box<dyn Transport>;
}

/// Shared production client, built once on first use
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Production [`TransportProvider`] backed by the shared [`reqwest::Client`]
///
/// `reqwest::Client` is a cheap handle over a pooled connector, so each
/// acquisition clones the shared client rather than rebuilding it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTransportProvider;

impl TransportProvider for DefaultTransportProvider {
    fn acquire(&self, name: &str) -> Box<dyn Transport> {
        trace!(client = name, "acquiring transport");
        Box::new(ReqwestTransport {
            client: SHARED_CLIENT.clone(),
        })
    }
}

/// Transport over a [`reqwest::Client`]
struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}
