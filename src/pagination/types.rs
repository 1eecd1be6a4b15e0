//! Pagination types
//!
//! Defines the page count, the pagination snapshot and the list metadata
//! that drives initialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// First page number
pub const FIRST_PAGE: i64 = 1;

// ============================================================================
// Page Count
// ============================================================================

/// Number of pages derived from a total item count and a page size
///
/// Degenerate inputs are kept rather than rejected so that consumers can
/// tell them apart:
/// - a zero page size with items yields [`PageCount::Unbounded`]
/// - a zero page size with a negative total yields [`PageCount::NegativeUnbounded`]
/// - negative totals or page sizes yield a negative [`PageCount::Finite`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageCountRepr", into = "PageCountRepr")]
pub enum PageCount {
    /// A finite (possibly zero or negative) number of pages
    Finite(i64),
    /// Positive infinity
    Unbounded,
    /// Negative infinity
    NegativeUnbounded,
}

impl PageCount {
    /// Compute `ceil(total_items / page_size)`
    pub fn from_totals(total_items: i64, page_size: i64) -> Self {
        if page_size == 0 {
            return match total_items.signum() {
                1 => Self::Unbounded,
                -1 => Self::NegativeUnbounded,
                _ => Self::Finite(0),
            };
        }

        match (
            total_items.checked_div(page_size),
            total_items.checked_rem(page_size),
        ) {
            // Truncation rounds toward zero; step up when the exact quotient is
            // positive and has a fractional part.
            (Some(quotient), Some(remainder))
                if remainder != 0 && (remainder > 0) == (page_size > 0) =>
            {
                Self::Finite(quotient + 1)
            }
            (Some(quotient), Some(_)) => Self::Finite(quotient),
            // i64::MIN / -1
            _ => Self::Unbounded,
        }
    }

    /// Get the page count if it is finite
    pub fn finite(&self) -> Option<i64> {
        match self {
            Self::Finite(count) => Some(*count),
            _ => None,
        }
    }

    /// Check if the count is finite
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Check if the count is positive infinity
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Check if the count is below zero
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Finite(count) => *count < 0,
            Self::NegativeUnbounded => true,
            Self::Unbounded => false,
        }
    }

    /// Check if a page exists after `page`
    ///
    /// Compares against the count as a number, so every page lies before
    /// `Unbounded` and none before `NegativeUnbounded`.
    pub fn has_page_after(&self, page: i64) -> bool {
        match self {
            Self::Finite(count) => page < *count,
            Self::Unbounded => true,
            Self::NegativeUnbounded => false,
        }
    }

    /// The page a navigator may move to after `page`
    ///
    /// Only finite counts can be walked.
    pub fn next_page(&self, page: i64) -> Option<i64> {
        match self {
            Self::Finite(count) if page < *count => page.checked_add(1),
            _ => None,
        }
    }
}

impl Default for PageCount {
    fn default() -> Self {
        Self::Finite(0)
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(count) => write!(f, "{count}"),
            Self::Unbounded => f.write_str(INFINITY),
            Self::NegativeUnbounded => f.write_str(NEGATIVE_INFINITY),
        }
    }
}

const INFINITY: &str = "Infinity";
const NEGATIVE_INFINITY: &str = "-Infinity";

/// Wire form: a number when finite, otherwise an infinity token
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PageCountRepr {
    Count(i64),
    Token(String),
}

impl From<PageCount> for PageCountRepr {
    fn from(count: PageCount) -> Self {
        match count {
            PageCount::Finite(count) => Self::Count(count),
            other => Self::Token(other.to_string()),
        }
    }
}

impl TryFrom<PageCountRepr> for PageCount {
    type Error = String;

    fn try_from(repr: PageCountRepr) -> Result<Self, Self::Error> {
        match repr {
            PageCountRepr::Count(count) => Ok(Self::Finite(count)),
            PageCountRepr::Token(token) => match token.as_str() {
                INFINITY => Ok(Self::Unbounded),
                NEGATIVE_INFINITY => Ok(Self::NegativeUnbounded),
                _ => Err(format!("invalid page count: {token}")),
            },
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Snapshot of pagination state for a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based index of the active page
    pub current_page: i64,
    /// Items per page
    pub page_size: i64,
    /// Total item count across all pages
    pub total_items: i64,
    /// Derived page count
    pub total_pages: PageCount,
    /// Whether a following page can be reached
    pub next_enabled: bool,
    /// Whether a preceding page can be reached
    pub previous_enabled: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: FIRST_PAGE,
            page_size: 0,
            total_items: 0,
            total_pages: PageCount::default(),
            next_enabled: false,
            previous_enabled: false,
        }
    }
}

impl Pagination {
    /// Create the empty pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Build pagination from list metadata
    pub fn from_metadata(metadata: &ListMetadata) -> Self {
        Self::initialize(metadata.total, metadata.per_page, metadata.current_page)
    }

    /// Check whether the active page is the first one
    pub fn is_first_page(&self) -> bool {
        self.current_page <= FIRST_PAGE
    }

    /// Check whether the active page is the last one
    pub fn is_last_page(&self) -> bool {
        self.total_pages.finite() == Some(self.current_page)
    }
}

// ============================================================================
// List Metadata
// ============================================================================

/// Metadata supplied by the list view coordinator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    /// Total item count
    pub total: i64,
    /// Items per page
    #[serde(alias = "per_page")]
    pub per_page: i64,
    /// Active page, `None` or `0` meaning the first page
    #[serde(default, alias = "current_page", skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
}

impl ListMetadata {
    /// Create metadata without a current page
    pub fn new(total: i64, per_page: i64) -> Self {
        Self {
            total,
            per_page,
            current_page: None,
        }
    }

    /// Set the current page
    #[must_use]
    pub fn with_current_page(mut self, page: i64) -> Self {
        self.current_page = Some(page);
        self
    }
}

impl From<ListMetadata> for Pagination {
    fn from(metadata: ListMetadata) -> Self {
        Self::from_metadata(&metadata)
    }
}
