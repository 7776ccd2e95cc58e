#![doc = include_str!("../README.md")]

/// OEIS article values and sequence reconstruction
pub mod article;
mod error;
mod query;
mod record;
/// HTTP transport capability
pub mod transport;

pub use article::{Article, ArticleItem};
pub use error::{OeisError, Result};
pub use query::{DEFAULT_MAX_NUMBER, OeisQuery};
pub use transport::{CLIENT_NAME, DefaultTransportProvider, HttpReply, Transport, TransportProvider};
