//! Single-article lookup by catalog number

use tokio_util::sync::CancellationToken;
use tracing::trace;

use super::{BASE_URL, OeisQuery};
use crate::article::Article;
use crate::record;
use crate::Result;

impl OeisQuery {
    /// Fetch the article with catalog number `number`, honoring `token`
    ///
    /// Numbers outside `1..max_number` resolve to [`Article::none`]
    /// immediately, without any network access; absence of a valid
    /// identifier is not an error. A null response body (no such article)
    /// also resolves to the sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`OeisError::Http`](crate::OeisError::Http) - The request could
    ///   not be completed
    /// - [`OeisError::Status`](crate::OeisError::Status) - The encyclopedia
    ///   answered with a non-success status
    /// - [`OeisError::Decode`](crate::OeisError::Decode) - The response
    ///   body is not the expected JSON
    /// - [`OeisError::Cancelled`](crate::OeisError::Cancelled) - `token`
    ///   was cancelled
    pub async fn query_sequence_with(
        &self,
        number: i64,
        token: &CancellationToken,
    ) -> Result<Article> {
        if number <= 0 || number >= i64::from(self.max_number) {
            trace!(number, "catalog number out of range, resolving to none");
            return Ok(Article::none().clone());
        }

        let url = format!("{BASE_URL}/A{number:06}?fmt=json");
        let body = self.fetch(&url, token).await?;

        let found = record::decode_single(&body)?;

        Ok(found.map_or_else(|| Article::none().clone(), Article::from_record))
    }

    /// Fetch the article with catalog number `number`
    ///
    /// Same as [`OeisQuery::query_sequence_with`] with a token that is
    /// never cancelled.
    pub async fn query_sequence(&self, number: i64) -> Result<Article> {
        self.query_sequence_with(number, &CancellationToken::new())
            .await
    }
}
