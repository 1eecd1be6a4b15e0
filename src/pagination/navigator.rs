//! Pagination transitions
//!
//! Every transition takes a snapshot and returns a complete new one, so the
//! derived flags are always recomputed together with the page.

use super::types::{ListMetadata, PageCount, Pagination, FIRST_PAGE};

impl Pagination {
    /// Derive a full pagination state from list metadata
    ///
    /// A missing or zero `current_page` resolves to the first page. Other
    /// values are taken as given, so an out-of-range page still produces
    /// consistent flags.
    pub fn initialize(total: i64, per_page: i64, current_page: Option<i64>) -> Self {
        let current_page = match current_page {
            None | Some(0) => FIRST_PAGE,
            Some(page) => page,
        };

        Self::derive(current_page, per_page, total, PageCount::from_totals(total, per_page))
    }

    /// Move to the next page
    ///
    /// On the last page, or when the page count is unbounded, the page is
    /// kept and `next_enabled` is cleared.
    #[must_use]
    pub fn advance(self) -> Self {
        if let Some(page) = self.total_pages.next_page(self.current_page) {
            self.with_page(page)
        } else {
            Self {
                next_enabled: false,
                previous_enabled: self.current_page > FIRST_PAGE,
                ..self
            }
        }
    }

    /// Move to the previous page
    ///
    /// On the first page the page is kept and `previous_enabled` is cleared.
    #[must_use]
    pub fn retreat(self) -> Self {
        if self.current_page > FIRST_PAGE {
            self.with_page(self.current_page - 1)
        } else {
            Self {
                next_enabled: self.total_pages.has_page_after(self.current_page),
                previous_enabled: false,
                ..self
            }
        }
    }

    /// Jump to the first page
    #[must_use]
    pub fn reset(self) -> Self {
        self.with_page(FIRST_PAGE)
    }

    /// Replace the page and recompute both flags
    fn with_page(self, current_page: i64) -> Self {
        Self::derive(current_page, self.page_size, self.total_items, self.total_pages)
    }

    fn derive(current_page: i64, page_size: i64, total_items: i64, total_pages: PageCount) -> Self {
        Self {
            current_page,
            page_size,
            total_items,
            total_pages,
            next_enabled: total_pages.has_page_after(current_page),
            previous_enabled: current_page > FIRST_PAGE,
        }
    }
}

/// Derive pagination state from a metadata triple
pub fn initialize(total: i64, per_page: i64, current_page: Option<i64>) -> Pagination {
    Pagination::initialize(total, per_page, current_page)
}

/// Derive pagination state from list metadata
pub fn initialize_from(metadata: &ListMetadata) -> Pagination {
    Pagination::from_metadata(metadata)
}
