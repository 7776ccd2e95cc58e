//! Stub transport providers backing the query tests
//!
//! [`FixtureProvider`] mimics the encyclopedia: it knows the Fibonacci
//! article (A000045), the Euler totient article (A000010), and answers
//! "null"/"[]" for everything else, the way the real endpoints report no
//! match.

use std::sync::Arc;

use async_trait::async_trait;
use oeis_rs::{HttpReply, OeisError, OeisQuery, Result, Transport, TransportProvider, CLIENT_NAME};
use tokio_util::sync::CancellationToken;

pub const FIBONACCI_NUMBER: i64 = 45;
pub const FIBONACCI_NAME: &str = "A000045";
pub const FIBONACCI_TITLE: &str =
    "Fibonacci numbers: F(n) = F(n-1) + F(n-2) with F(0) = 0 and F(1) = 1.";
pub const TOTIENT_NUMBER: i64 = 10;

const FIBONACCI_RECORD: &str = r#"{
    "number": 45,
    "id": "M0692 N0256",
    "data": "0,1,1,2,3,5,8,13,21,34,55,89,144,233",
    "name": "Fibonacci numbers: F(n) = F(n-1) + F(n-2) with F(0) = 0 and F(1) = 1.",
    "comment": ["Also sometimes called Lamé's sequence."],
    "reference": ["H. Halberstam and K. F. Roth, Sequences, Oxford, 1966; see Appendix."],
    "link": ["<a href=\"/index/Tu#2wis\">Index entries for two-way infinite sequences</a>"],
    "formula": ["F(n) = F(n-1) + F(n-2) = -(-1)^n F(-n)."],
    "keyword": "nonn,core,nice,easy",
    "offset": "0,4"
}"#;

const TOTIENT_RECORD: &str = r#"{
    "number": 10,
    "data": "1,1,2,2,4,2,6,4,6,4,10,4",
    "name": "Euler totient function phi(n): count numbers <= n and prime to n."
}"#;

/// Query service over the fixture encyclopedia
pub fn fixture_query() -> OeisQuery {
    OeisQuery::with_provider(Arc::new(FixtureProvider))
}

/// Query service whose provider panics if a transport is ever acquired
pub fn no_request_query() -> OeisQuery {
    OeisQuery::with_provider(Arc::new(NoRequestProvider))
}

/// Query service whose transport answers every GET with `status`
pub fn status_query(status: u16) -> OeisQuery {
    OeisQuery::with_provider(Arc::new(StatusProvider(status)))
}

/// Query service whose transport never completes its GET
pub fn stalled_query() -> OeisQuery {
    OeisQuery::with_provider(Arc::new(StalledProvider))
}

/// Query service whose transport cancels `token` while serving the GET,
/// then answers with a multi-record search body
pub fn cancel_during_get_query(token: CancellationToken) -> OeisQuery {
    OeisQuery::with_provider(Arc::new(CancelDuringGetProvider { token }))
}

/// Query service whose transport fails with a transport error
pub fn broken_query() -> OeisQuery {
    OeisQuery::with_provider(Arc::new(BrokenProvider))
}

/// A token that is already cancelled when the query starts
pub fn cancelled_token() -> CancellationToken {
    let token = CancellationToken::new();
    token.cancel();
    token
}

struct FixtureProvider;

impl TransportProvider for FixtureProvider {
    fn acquire(&self, name: &str) -> Box<dyn Transport> {
        assert_eq!(name, CLIENT_NAME, "unexpected client name");
        Box::new(FixtureTransport)
    }
}

struct FixtureTransport;

#[async_trait]
impl Transport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        let ok = |body: &str| {
            Ok(HttpReply {
                status: 200,
                body: body.to_string(),
            })
        };

        match url {
            "https://oeis.org/A000045?fmt=json" => ok(FIBONACCI_RECORD),
            "https://oeis.org/A000010?fmt=json" => ok(TOTIENT_RECORD),
            "https://oeis.org/search?q=1,1,2,3,5,8&fmt=json" => {
                ok(&format!("[{FIBONACCI_RECORD}, null]"))
            }
            _ if url.starts_with("https://oeis.org/search?") && url.ends_with("&fmt=json") => {
                ok("[]")
            }
            _ if url.starts_with("https://oeis.org/A") && url.ends_with("?fmt=json") => ok("null"),
            _ => Ok(HttpReply {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

struct NoRequestProvider;

impl TransportProvider for NoRequestProvider {
    fn acquire(&self, _name: &str) -> Box<dyn Transport> {
        panic!("no transport acquisition expected for this query");
    }
}

struct StatusProvider(u16);

impl TransportProvider for StatusProvider {
    fn acquire(&self, _name: &str) -> Box<dyn Transport> {
        Box::new(StatusTransport(self.0))
    }
}

struct StatusTransport(u16);

#[async_trait]
impl Transport for StatusTransport {
    async fn get(&self, _url: &str) -> Result<HttpReply> {
        Ok(HttpReply {
            status: self.0,
            body: String::new(),
        })
    }
}

struct CancelDuringGetProvider {
    token: CancellationToken,
}

impl TransportProvider for CancelDuringGetProvider {
    fn acquire(&self, _name: &str) -> Box<dyn Transport> {
        Box::new(CancelDuringGetTransport {
            token: self.token.clone(),
        })
    }
}

struct CancelDuringGetTransport {
    token: CancellationToken,
}

#[async_trait]
impl Transport for CancelDuringGetTransport {
    async fn get(&self, _url: &str) -> Result<HttpReply> {
        // The reply arrives intact, but the caller's token is already
        // cancelled by the time the mapping pass starts.
        self.token.cancel();
        Ok(HttpReply {
            status: 200,
            body: format!("[{FIBONACCI_RECORD}, null, {TOTIENT_RECORD}]"),
        })
    }
}

struct BrokenProvider;

impl TransportProvider for BrokenProvider {
    fn acquire(&self, _name: &str) -> Box<dyn Transport> {
        Box::new(BrokenTransport)
    }
}

struct BrokenTransport;

#[async_trait]
impl Transport for BrokenTransport {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        Err(OeisError::Transport(format!("connection refused for {url}")))
    }
}

struct StalledProvider;

impl TransportProvider for StalledProvider {
    fn acquire(&self, _name: &str) -> Box<dyn Transport> {
        Box::new(StalledTransport)
    }
}

struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn get(&self, _url: &str) -> Result<HttpReply> {
        std::future::pending().await
    }
}
