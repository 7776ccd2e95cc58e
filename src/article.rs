//! OEIS article values and numeric sequence reconstruction
//!
//! An [`Article`] is the normalized, immutable form of one encyclopedia
//! entry. Identity and ordering are defined by the catalog number alone;
//! the leading run of the sequence itself can be reconstructed lazily into
//! any primitive integer type with [`Article::first_items`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::record::ArticleRecord;

mod sealed {
    pub trait Sealed {}
}

/// Integer types an article's raw data can be reconstructed into.
///
/// Sealed; implemented for the primitive integer types. Parsing goes
/// through [`FromStr`], which for integers is locale-independent.
pub trait ArticleItem: sealed::Sealed + FromStr {}

macro_rules! article_item {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}
        impl ArticleItem for $ty {}
    )*};
}

article_item!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// The single process-wide "no such article" value
static NONE: LazyLock<Article> = LazyLock::new(|| Article {
    number: 0,
    title: String::new(),
    comments: Vec::new(),
    references: Vec::new(),
    links: Vec::new(),
    formulae: Vec::new(),
    raw_data: Vec::new(),
});

/// One OEIS encyclopedia entry
///
/// Immutable after construction. Articles are only built by the query
/// service from a decoded response, or obtained as the [`Article::none`]
/// sentinel. Two articles are equal iff their numbers are equal; ordering
/// is total, by number ascending.
///
/// # Example
///
/// ```no_run
/// use oeis_rs::OeisQuery;
///
/// # async fn example() -> oeis_rs::Result<()> {
/// let article = OeisQuery::new().query_sequence(45).await?;
/// assert_eq!(article.name(), "A000045");
///
/// let first: Vec<u64> = article.first_items().collect();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Article {
    number: u32,
    title: String,
    comments: Vec<String>,
    references: Vec<String>,
    links: Vec<String>,
    formulae: Vec<String>,
    raw_data: Vec<String>,
}

impl Article {
    /// The sentinel standing in for "no such article"
    ///
    /// Number 0, name `"A000000"`, every list empty, no raw data. Equality
    /// and ordering apply to it unchanged, so callers can treat it as any
    /// other article.
    pub fn none() -> &'static Article {
        &NONE
    }

    /// Whether this article is the [`Article::none`] sentinel
    pub fn is_none(&self) -> bool {
        self.number == 0
    }

    /// Catalog number in the encyclopedia
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Catalog name, always `"A"` followed by the zero-padded number
    pub fn name(&self) -> String {
        format!("A{:06}", self.number)
    }

    /// Human-readable title; empty when absent
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Comments for the article, in source order
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// References for the article, in source order
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Links for the article, in source order
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Formulae for the article, in source order
    pub fn formulae(&self) -> &[String] {
        &self.formulae
    }

    /// Reconstruct the leading run of the sequence as values of type `T`
    ///
    /// Parses the stored raw tokens in order and stops at the first token
    /// that does not parse as `T` (too large for the type, fractional,
    /// negative for an unsigned type, and so on). The failing token is not
    /// emitted and nothing past it is inspected.
    ///
    /// The iterator borrows the article's immutable data, so it is lazy
    /// and restartable: every call replays from the start, independent of
    /// prior calls. On the [`Article::none`] sentinel it is empty.
    pub fn first_items<T: ArticleItem>(&self) -> impl Iterator<Item = T> + '_ {
        self.raw_data.iter().map_while(|token| token.parse().ok())
    }

    /// Build an article from a decoded wire record
    pub(crate) fn from_record(record: ArticleRecord) -> Self {
        let raw_data = record
            .data
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            number: record.number,
            title: record.name.unwrap_or_default(),
            comments: record.comments.unwrap_or_default(),
            references: record.references.unwrap_or_default(),
            links: record.links.unwrap_or_default(),
            formulae: record.formulae.unwrap_or_default(),
            raw_data,
        }
    }
}

impl fmt::Display for Article {
    /// Debug/display form `"{name}: {title}"`; not part of any protocol
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.title)
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl PartialOrd for Article {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Article {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}
