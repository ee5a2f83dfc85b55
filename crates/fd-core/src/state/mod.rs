//! View state for the active entity context
//!
//! The state is an explicit value: renderers take it in and hand it back,
//! there is no process-wide mutable state.

use std::cmp::Ordering;

use ahash::AHashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::entity::{EntityKind, ViewLayout};
use crate::record::Value;

/// Default rows per page for table views
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default cards per page for card-grid views
pub const DEFAULT_GRID_PAGE_SIZE: usize = 6;

/// Errors raised by state transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("page size must be positive, got {0}")]
    InvalidPageSize(usize),

    #[error("page numbers start at 1, got {0}")]
    InvalidPage(usize),

    #[error("unknown entity kind: {0}")]
    UnknownEntity(String),

    #[error("{kind} is not part of the {tab} tab")]
    NotInTab { kind: EntityKind, tab: String },
}

/// Sort direction; flips comparison polarity only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some()
    }

    /// Direction if `field` is the active sort column
    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        match &self.field {
            Some(f) if f == field => Some(self.direction),
            _ => None,
        }
    }
}

/// Accepted value per field; a missing entry means no constraint
pub type FilterSet = IndexMap<String, Value>;

/// Page sizes per layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    pub table: usize,
    pub cards: usize,
}

impl PageSizes {
    pub fn new(table: usize, cards: usize) -> Result<Self, StateError> {
        for size in [table, cards] {
            if size == 0 {
                return Err(StateError::InvalidPageSize(size));
            }
        }
        Ok(Self { table, cards })
    }

    pub fn for_layout(&self, layout: ViewLayout) -> usize {
        match layout {
            ViewLayout::Table => self.table,
            ViewLayout::Cards => self.cards,
        }
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            table: DEFAULT_PAGE_SIZE,
            cards: DEFAULT_GRID_PAGE_SIZE,
        }
    }
}

/// Page, sort, filters and search for the active view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    page: usize,
    page_size: usize,
    sort: SortSpec,
    filters: AHashMap<EntityKind, FilterSet>,
    search_term: String,
    page_sizes: PageSizes,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_sizes(PageSizes::default())
    }
}

impl ViewState {
    /// Create a state whose table and card views use the given page sizes
    pub fn new(table_page_size: usize, card_page_size: usize) -> Result<Self, StateError> {
        Ok(Self::with_page_sizes(PageSizes::new(table_page_size, card_page_size)?))
    }

    pub fn with_page_sizes(page_sizes: PageSizes) -> Self {
        Self {
            page: 1,
            page_size: page_sizes.table,
            sort: SortSpec::default(),
            filters: AHashMap::new(),
            search_term: String::new(),
            page_sizes,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Filters recorded for `kind`
    pub fn filters_for(&self, kind: EntityKind) -> Option<&FilterSet> {
        self.filters.get(&kind)
    }

    /// Accepted value of a single filter field
    pub fn filter_value(&self, kind: EntityKind, field: &str) -> Option<&Value> {
        self.filters.get(&kind).and_then(|f| f.get(field))
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), StateError> {
        if page_size == 0 {
            return Err(StateError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<(), StateError> {
        if page < 1 {
            return Err(StateError::InvalidPage(page));
        }
        self.page = page;
        Ok(())
    }

    /// Store the search term and return to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Set or clear one filter of `kind`; `None` or empty text clears it
    pub fn set_filter(&mut self, kind: EntityKind, field: impl Into<String>, value: Option<Value>) {
        let field = field.into();
        let filters = self.filters.entry(kind).or_default();
        match value {
            Some(v) if !v.is_empty() => {
                debug!(%kind, %field, value = %v, "filter set");
                filters.insert(field, v);
            }
            _ => {
                debug!(%kind, %field, "filter cleared");
                filters.shift_remove(&field);
            }
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self, kind: EntityKind) {
        self.filters.remove(&kind);
        self.page = 1;
    }

    /// Same field flips the direction, a new field sorts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        match self.sort.direction_for(field) {
            Some(direction) => self.sort.direction = direction.flip(),
            None => self.sort = SortSpec::by(field, SortDirection::Ascending),
        }
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Sub-tab switch: page and search reset, sort and filters retained
    pub fn enter_entity(&mut self, kind: EntityKind) {
        self.page = 1;
        self.search_term.clear();
        self.page_size = self.page_sizes.for_layout(kind.layout());
    }

    /// Top-level tab switch: additionally unsets the sort
    pub fn enter_main_tab(&mut self) {
        self.page = 1;
        self.search_term.clear();
        self.sort = SortSpec::default();
    }
}
