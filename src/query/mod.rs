//! OEIS query service
//!
//! Builds the two supported request shapes, drives the transport and the
//! JSON decode, and maps responses onto [`Article`](crate::Article) values
//! or the none sentinel.

mod lookup;
mod name;
mod search;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::transport::{CLIENT_NAME, DefaultTransportProvider, TransportProvider};
use crate::{OeisError, Result};

/// Base URL of the encyclopedia
const BASE_URL: &str = "https://oeis.org";

/// Default fast-reject upper bound on catalog numbers (exclusive)
///
/// An estimate of the current OEIS id space, not an external contract;
/// override it with [`OeisQuery::max_number`] if the catalog outgrows it.
pub const DEFAULT_MAX_NUMBER: u32 = 10_000_000;

/// Async OEIS query service
///
/// Each query method performs at most one outbound GET (zero on the
/// fast-reject paths), acquiring a fresh transport for the duration of the
/// call. There are no retries and no shared mutable state, so one service
/// value can serve concurrent calls.
///
/// # Example
///
/// ```no_run
/// use oeis_rs::OeisQuery;
///
/// # async fn example() -> oeis_rs::Result<()> {
/// let query = OeisQuery::new();
///
/// let fibonacci = query.query_sequence(45).await?;
/// let candidates = query.query_sequences([1u32, 1, 2, 3, 5, 8]).await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct OeisQuery {
    provider: Arc<dyn TransportProvider>,
    max_number: u32,
}

impl Default for OeisQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl OeisQuery {
    /// Create a query service over the default HTTP transport
    pub fn new() -> Self {
        Self::with_provider(Arc::new(DefaultTransportProvider))
    }

    /// Create a query service over a custom transport provider
    ///
    /// This is the seam for testing: substitute a provider serving canned
    /// replies and no query touches the network.
    pub fn with_provider(provider: Arc<dyn TransportProvider>) -> Self {
        Self {
            provider,
            max_number: DEFAULT_MAX_NUMBER,
        }
    }

    /// Override the fast-reject upper bound on catalog numbers
    pub fn max_number(mut self, max_number: u32) -> Self {
        self.max_number = max_number;
        self
    }

    /// GET `url` through a freshly acquired transport and require success
    ///
    /// Races the transport call against `token`; cancellation observed here
    /// abandons the in-flight request and surfaces as
    /// [`OeisError::Cancelled`]. A non-success status is an error, never a
    /// silent none.
    pub(crate) async fn fetch(&self, url: &str, token: &CancellationToken) -> Result<String> {
        let transport = self.provider.acquire(CLIENT_NAME);
        trace!(url, "issuing GET");

        let reply = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(OeisError::Cancelled),
            reply = transport.get(url) => reply?,
        };

        if !reply.is_success() {
            debug!(status = reply.status, url, "non-success status");
            return Err(OeisError::Status {
                status: reply.status,
                url: url.to_owned(),
            });
        }

        Ok(reply.body)
    }
}
