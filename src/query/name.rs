//! Convenience lookup by `"A000045"`-style sequence name

use tokio_util::sync::CancellationToken;
use tracing::trace;

use super::OeisQuery;
use crate::article::Article;
use crate::Result;

impl OeisQuery {
    /// Fetch the article named e.g. `"A000045"`, honoring `token`
    ///
    /// The name is trimmed; a leading `A` (either case) followed by a
    /// parsable integer delegates to
    /// [`OeisQuery::query_sequence_with`]. Empty or whitespace-only input,
    /// a malformed prefix, or an unparsable remainder all resolve to
    /// [`Article::none`] without any network access.
    ///
    /// # Errors
    ///
    /// Same as [`OeisQuery::query_sequence_with`]; malformed names are not
    /// errors.
    pub async fn query_by_name_with(
        &self,
        name: &str,
        token: &CancellationToken,
    ) -> Result<Article> {
        let name = name.trim();

        if name.len() >= 2 && (name.starts_with('A') || name.starts_with('a')) {
            if let Some(number) = parse_catalog_number(&name[1..]) {
                return self.query_sequence_with(number, token).await;
            }
        }

        trace!(name, "not a sequence name, resolving to none");
        Ok(Article::none().clone())
    }

    /// Fetch the article named e.g. `"A000045"`
    ///
    /// Same as [`OeisQuery::query_by_name_with`] with a token that is never
    /// cancelled.
    pub async fn query_by_name(&self, name: &str) -> Result<Article> {
        self.query_by_name_with(name, &CancellationToken::new())
            .await
    }
}

/// Parse a catalog number permissively
///
/// Accepts what lenient numeric input forms allow beyond a bare decimal
/// integer: surrounding whitespace, an explicit sign, leading zeros,
/// thousands separators (`"1,000"`) and an all-zero fraction (`"45.0"`,
/// `"45."`).
fn parse_catalog_number(text: &str) -> Option<i64> {
    let text = text.trim();

    let (integral, fraction) = match text.split_once('.') {
        Some((integral, fraction)) => (integral, fraction),
        None => (text, ""),
    };

    if !fraction.bytes().all(|b| b == b'0') {
        return None;
    }

    integral.replace(',', "").parse().ok()
}
