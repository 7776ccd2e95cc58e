//! Wire-format records decoded from the OEIS JSON endpoints

use serde::Deserialize;

use crate::Result;

/// One encyclopedia entry as the OEIS JSON endpoints return it.
///
/// Every field except `number` may be absent; `Article::from_record`
/// normalizes absent fields to empty values.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ArticleRecord {
    /// Catalog number
    pub number: u32,
    /// Comma-separated leading values of the sequence
    pub data: Option<String>,
    /// Human-readable article title
    pub name: Option<String>,
    #[serde(rename = "comment")]
    pub comments: Option<Vec<String>>,
    #[serde(rename = "reference")]
    pub references: Option<Vec<String>>,
    #[serde(rename = "link")]
    pub links: Option<Vec<String>>,
    #[serde(rename = "formula")]
    pub formulae: Option<Vec<String>>,
}

/// Decode a single nullable record (lookup endpoint)
pub(crate) fn decode_single(body: &str) -> Result<Option<ArticleRecord>> {
    Ok(serde_json::from_str(body)?)
}

/// Decode an array of nullable records (search endpoint)
pub(crate) fn decode_list(body: &str) -> Result<Vec<Option<ArticleRecord>>> {
    Ok(serde_json::from_str(body)?)
}
