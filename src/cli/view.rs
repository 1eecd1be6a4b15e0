//! Text rendering of a pagination snapshot
//!
//! Decides what a list view shows for a given state: an empty-state banner,
//! an invalid-input banner, or the page position plus the enabled controls.

use crate::pagination::{PageCount, Pagination};
use std::fmt;

/// Banner shown when there is nothing to page through
pub const EMPTY_MESSAGE: &str = "No items to display";

/// Banner shown when the metadata produced negative values
pub const INVALID_MESSAGE: &str = "invalid value error";

/// Navigation control offered by the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Go to the next page
    ViewMore,
    /// Go to the previous page
    ViewPrevious,
    /// Go to the first page
    ViewFirst,
}

impl Control {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewMore => "view more",
            Self::ViewPrevious => "view previous page",
            Self::ViewFirst => "view first page",
        }
    }

    /// REPL command that triggers this control
    pub fn command(&self) -> &'static str {
        match self {
            Self::ViewMore => "next",
            Self::ViewPrevious => "prev",
            Self::ViewFirst => "first",
        }
    }
}

/// What a list view renders for a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// No items, or a page size that makes the page count unbounded
    Empty,
    /// Negative page size or page count
    Invalid,
    /// A normal page
    Ready {
        current_page: i64,
        total_pages: PageCount,
        page_size: i64,
        controls: Vec<Control>,
    },
}

impl ListView {
    /// Classify a snapshot
    ///
    /// The empty check runs first, so a negative total over a zero page size
    /// is still reported as invalid while zero items always read as empty.
    pub fn from_pagination(pagination: &Pagination) -> Self {
        if pagination.total_items == 0 || pagination.total_pages.is_unbounded() {
            return Self::Empty;
        }
        if pagination.page_size < 0 || pagination.total_pages.is_negative() {
            return Self::Invalid;
        }

        let mut controls = Vec::new();
        if pagination.next_enabled {
            controls.push(Control::ViewMore);
        }
        if pagination.previous_enabled {
            controls.push(Control::ViewPrevious);
            controls.push(Control::ViewFirst);
        }

        Self::Ready {
            current_page: pagination.current_page,
            total_pages: pagination.total_pages,
            page_size: pagination.page_size,
            controls,
        }
    }

    /// Controls currently offered
    pub fn controls(&self) -> &[Control] {
        match self {
            Self::Ready { controls, .. } => controls,
            _ => &[],
        }
    }

    /// Check whether a control is offered
    pub fn offers(&self, control: Control) -> bool {
        self.controls().contains(&control)
    }
}

impl From<&Pagination> for ListView {
    fn from(pagination: &Pagination) -> Self {
        Self::from_pagination(pagination)
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_MESSAGE),
            Self::Invalid => f.write_str(INVALID_MESSAGE),
            Self::Ready {
                current_page,
                total_pages,
                page_size,
                controls,
            } => {
                writeln!(f, "currentPage: {current_page}")?;
                writeln!(f, "totalPages: {total_pages}")?;
                write!(f, "pageSize: {page_size}")?;
                for control in controls {
                    write!(f, "\n[{}] {}", control.command(), control.label())?;
                }
                Ok(())
            }
        }
    }
}
