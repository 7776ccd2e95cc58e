//! Multi-match search: find articles fitting a partial integer sequence

use std::fmt::Display;

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::{BASE_URL, OeisQuery};
use crate::article::{Article, ArticleItem};
use crate::record;
use crate::{OeisError, Result};

impl OeisQuery {
    /// Search the encyclopedia for articles fitting `sequence`, honoring
    /// `token`
    ///
    /// Elements are rendered in decimal and joined with commas to form the
    /// search term. An empty sequence short-circuits to an empty list
    /// without any network access. Results keep the encyclopedia's order
    /// and are not deduplicated; null entries in the response are skipped.
    /// The token is also checked once per decoded entry, so cancellation
    /// requested mid-mapping does not force processing the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`OeisError::Http`] - The request could not be completed
    /// - [`OeisError::Status`] - The encyclopedia answered with a
    ///   non-success status
    /// - [`OeisError::Decode`] - The response body is not the expected JSON
    /// - [`OeisError::Cancelled`] - `token` was cancelled
    pub async fn query_sequences_with<T, I>(
        &self,
        sequence: I,
        token: &CancellationToken,
    ) -> Result<Vec<Article>>
    where
        T: ArticleItem + Display,
        I: IntoIterator<Item = T>,
    {
        let joined = sequence
            .into_iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(",");

        if joined.is_empty() {
            trace!("empty search term, skipping request");
            return Ok(Vec::new());
        }

        let url = format!("{BASE_URL}/search?q={joined}&fmt=json");
        let body = self.fetch(&url, token).await?;

        let records = record::decode_list(&body)?;
        debug!(candidates = records.len(), "search response decoded");

        let mut articles = Vec::with_capacity(records.len());
        for entry in records {
            if token.is_cancelled() {
                return Err(OeisError::Cancelled);
            }
            if let Some(found) = entry {
                articles.push(Article::from_record(found));
            }
        }

        Ok(articles)
    }

    /// Search the encyclopedia for articles fitting `sequence`
    ///
    /// Same as [`OeisQuery::query_sequences_with`] with a token that is
    /// never cancelled.
    pub async fn query_sequences<T, I>(&self, sequence: I) -> Result<Vec<Article>>
    where
        T: ArticleItem + Display,
        I: IntoIterator<Item = T>,
    {
        self.query_sequences_with(sequence, &CancellationToken::new())
            .await
    }
}
