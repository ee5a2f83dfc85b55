//! Pagination descriptor
//!
//! Describes the pagination bar without rendering it: numbered buttons with
//! ellipsis gaps, previous/next availability and the "Showing X–Y of N" range.

use std::fmt;

use fd_core::StateError;

use crate::query::total_pages;

/// One slot of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// The 1-based range of items on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}–{} of {}", self.start, self.end, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationPlan {
    pub total_pages: usize,
    pub current_page: usize,
    pub buttons: Vec<PageButton>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// `None` when the current page shows nothing
    pub summary: Option<RangeSummary>,
}

impl PaginationPlan {
    /// A single page (or none) needs no navigation
    pub fn is_trivial(&self) -> bool {
        self.total_pages <= 1
    }

    pub fn prev_page(&self) -> Option<usize> {
        self.prev_enabled.then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.next_enabled.then(|| self.current_page + 1)
    }
}

/// Build the plan for `total_items` at `page_size`, viewing `current_page`.
///
/// Pages shown: the first, the last and the current page with one
/// neighbour on each side. A page exactly two away from the current one
/// becomes an ellipsis.
pub fn plan(total_items: usize, current_page: usize, page_size: usize) -> Result<PaginationPlan, StateError> {
    if page_size == 0 {
        return Err(StateError::InvalidPageSize(page_size));
    }
    if current_page == 0 {
        return Err(StateError::InvalidPage(current_page));
    }

    let total_pages = total_pages(total_items, page_size);
    let buttons = (1..=total_pages)
        .filter_map(|i| {
            if i == 1 || i == total_pages || i.abs_diff(current_page) <= 1 {
                Some(PageButton::Page {
                    number: i,
                    current: i == current_page,
                })
            } else if i.abs_diff(current_page) == 2 {
                Some(PageButton::Ellipsis)
            } else {
                None
            }
        })
        .collect();

    let start = (current_page - 1).saturating_mul(page_size) + 1;
    let end = current_page.saturating_mul(page_size).min(total_items);
    let summary = (total_items > 0 && start <= total_items).then_some(RangeSummary {
        start,
        end,
        total: total_items,
    });

    Ok(PaginationPlan {
        total_pages,
        current_page,
        buttons,
        prev_enabled: current_page > 1,
        next_enabled: current_page < total_pages,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(plan: &PaginationPlan) -> Vec<Option<usize>> {
        plan.buttons
            .iter()
            .map(|b| match b {
                PageButton::Page { number, .. } => Some(*number),
                PageButton::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_last_page_of_three() {
        let plan = plan(25, 3, 10).unwrap();
        assert_eq!(plan.total_pages, 3);
        assert!(plan.prev_enabled);
        assert!(!plan.next_enabled);
        assert_eq!(plan.summary.unwrap().to_string(), "Showing 21–25 of 25");
        assert_eq!(numbers(&plan), vec![Some(1), Some(2), Some(3)]);
        assert!(plan
            .buttons
            .contains(&PageButton::Page { number: 3, current: true }));
    }

    #[test]
    fn test_ellipsis_around_window() {
        let plan = plan(100, 5, 10).unwrap();
        assert_eq!(
            numbers(&plan),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(plan.prev_page(), Some(4));
        assert_eq!(plan.next_page(), Some(6));
    }

    #[test]
    fn test_first_page() {
        let plan = plan(100, 1, 10).unwrap();
        assert_eq!(numbers(&plan), vec![Some(1), Some(2), None, Some(10)]);
        assert_eq!(plan.prev_page(), None);
    }

    #[test]
    fn test_single_page_is_trivial() {
        let plan = plan(4, 1, 10).unwrap();
        assert!(plan.is_trivial());
        assert_eq!(numbers(&plan), vec![Some(1)]);
        assert!(!plan.next_enabled);
        assert_eq!(plan.summary.unwrap().to_string(), "Showing 1–4 of 4");
    }

    #[test]
    fn test_empty_has_no_summary() {
        let plan = plan(0, 1, 10).unwrap();
        assert_eq!(plan.total_pages, 0);
        assert!(plan.buttons.is_empty());
        assert!(plan.summary.is_none());
        assert!(!plan.prev_enabled && !plan.next_enabled);
    }

    #[test]
    fn test_page_beyond_end() {
        let plan = plan(5, 3, 10).unwrap();
        assert!(plan.summary.is_none());
        assert!(plan.prev_enabled);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(plan(5, 1, 0), Err(StateError::InvalidPageSize(0)));
        assert_eq!(plan(5, 0, 10), Err(StateError::InvalidPage(0)));
    }
}
