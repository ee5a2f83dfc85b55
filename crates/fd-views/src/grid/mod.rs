//! Generic grid component
//!
//! A [`GridView`] is the column descriptors of one entity plus the shared
//! query pipeline. Rendering produces a [`RenderedView`] that the UI paints
//! as a table or a card grid without knowing anything about the entity.

mod columns;
mod format;

use fd_core::{EntityKind, Identity, Record, SortDirection, SortSpec, StateError, ViewLayout, ViewState};
use fd_data::pagination::{self, PaginationPlan};
use fd_data::query::{total_pages, Query};
use fd_data::schema::schema;
use fd_data::EntityStore;
use tracing::debug;

use crate::stats::{self, StatCard, Tone};

pub use format::{cell_tone, format_cell, group_thousands, stars, Format, ToneRule};

/// Column descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub label: &'static str,
    pub format: Format,
    pub sortable: bool,
    pub tone: ToneRule,
}

impl Column {
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: Format::Plain,
            sortable: false,
            tone: ToneRule::None,
        }
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub const fn score_tone(mut self) -> Self {
        self.tone = ToneRule::Score;
        self
    }

    pub const fn stock_tone(mut self) -> Self {
        self.tone = ToneRule::Stock;
        self
    }
}

/// Header of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub field: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    /// Set on the active sort column
    pub sort: Option<SortDirection>,
}

impl HeaderCell {
    /// Label with the sort arrow appended when active
    pub fn text(&self) -> String {
        match self.sort {
            Some(direction) => format!("{} {}", self.label, direction.arrow()),
            None => self.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub identity: Option<Identity>,
    pub cells: Vec<Cell>,
}

/// A dropdown filter with its current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub field: &'static str,
    pub all_label: &'static str,
    pub options: &'static [&'static str],
    pub selected: Option<String>,
}

/// Which row actions the view offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

/// Everything the UI needs to paint an entity view
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub kind: EntityKind,
    pub title: &'static str,
    pub layout: ViewLayout,
    pub search_term: String,
    pub filters: Vec<FilterControl>,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
    pub pagination: PaginationPlan,
    pub stats: Vec<StatCard>,
    pub actions: RowActions,
    pub total_matched: usize,
    /// Set when the page has no rows
    pub empty_message: Option<String>,
}

/// Column descriptors and layout of one entity view
#[derive(Debug, Clone, Copy)]
pub struct GridView {
    pub kind: EntityKind,
    pub columns: &'static [Column],
    pub layout: ViewLayout,
}

impl GridView {
    pub fn for_kind(kind: EntityKind) -> Self {
        Self {
            kind,
            columns: columns::columns(kind),
            layout: kind.layout(),
        }
    }

    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Whether a header click on `field` may change the sort
    pub fn is_sortable(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c.field == field && c.sortable)
    }

    pub fn headers(&self, sort: &SortSpec) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|c| HeaderCell {
                field: c.field,
                label: c.label,
                sortable: c.sortable,
                sort: if c.sortable { sort.direction_for(c.field) } else { None },
            })
            .collect()
    }

    pub fn row(&self, record: &Record) -> RenderedRow {
        RenderedRow {
            identity: record.identity(self.kind.identity_field()),
            cells: self
                .columns
                .iter()
                .map(|c| Cell {
                    text: format_cell(c.format, record, c.field),
                    tone: cell_tone(c.tone, record, c.field),
                })
                .collect(),
        }
    }

    fn filter_controls(&self, state: &ViewState) -> Vec<FilterControl> {
        schema(self.kind)
            .filters
            .iter()
            .map(|f| FilterControl {
                field: f.field,
                all_label: f.all_label,
                options: f.options,
                selected: state.filter_value(self.kind, f.field).map(ToString::to_string),
            })
            .collect()
    }

    /// Run the pipeline for this view.
    ///
    /// A page past the end (after a delete, say) is pulled back to the last
    /// page; the adjusted state is returned alongside the view.
    pub fn render(
        &self,
        mut state: ViewState,
        store: &EntityStore,
    ) -> Result<(RenderedView, ViewState), StateError> {
        let records = store.records(self.kind);

        let mut result = Query::for_view(self.kind, &state).run(records)?;
        let last_page = total_pages(result.total_matched, state.page_size());
        if last_page > 0 && state.page() > last_page {
            debug!(kind = %self.kind, from = state.page(), to = last_page, "page clamped");
            state.go_to_page(last_page)?;
            result = Query::for_view(self.kind, &state).run(records)?;
        }

        let pagination = pagination::plan(result.total_matched, state.page(), state.page_size())?;
        let rows: Vec<RenderedRow> = result.page.iter().map(|r| self.row(r)).collect();
        let empty_message = rows.is_empty().then(|| self.empty_message(&state, records.is_empty()));
        let entity = schema(self.kind);

        let view = RenderedView {
            kind: self.kind,
            title: self.kind.label(),
            layout: self.layout,
            search_term: state.search_term().to_string(),
            filters: self.filter_controls(&state),
            headers: self.headers(state.sort()),
            rows,
            pagination,
            stats: stats::summarize(self.kind, records),
            actions: RowActions {
                create: entity.creatable,
                edit: entity.editable,
                delete: entity.deletable,
            },
            total_matched: result.total_matched,
            empty_message,
        };
        Ok((view, state))
    }

    fn empty_message(&self, state: &ViewState, collection_empty: bool) -> String {
        let narrowed = !state.search_term().is_empty()
            || state.filters_for(self.kind).map_or(false, |f| !f.is_empty());
        if collection_empty {
            format!("No {}s yet", self.kind.noun())
        } else if narrowed {
            format!("No {}s match the current search or filters", self.kind.noun())
        } else {
            format!("No {}s on this page", self.kind.noun())
        }
    }
}

/// Render the entity view `kind`: `(state, store) -> (view, state)`
pub fn render(
    kind: EntityKind,
    state: ViewState,
    store: &EntityStore,
) -> Result<(RenderedView, ViewState), StateError> {
    GridView::for_kind(kind).render(state, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::{record, Value};

    fn store() -> EntityStore {
        let mut store = EntityStore::new();
        store
            .seed(
                EntityKind::Orders,
                (1..=25)
                    .map(|i| {
                        record! {
                            "id" => format!("ORD-{i:03}"),
                            "user" => if i % 2 == 0 { "Hanako Sato" } else { "Taro Yamada" },
                            "type" => "Takeout",
                            "status" => if i % 5 == 0 { "Completed" } else { "Cooking" },
                            "total" => i * 100,
                            "time" => "14:30",
                        }
                    })
                    .collect(),
            )
            .unwrap();
        store
    }

    fn state() -> ViewState {
        let mut state = ViewState::default();
        state.enter_entity(EntityKind::Orders);
        state
    }

    #[test]
    fn test_render_first_page() {
        let (view, state) = render(EntityKind::Orders, state(), &store()).unwrap();
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.total_matched, 25);
        assert_eq!(view.pagination.total_pages, 3);
        assert_eq!(state.page(), 1);
        assert_eq!(view.rows[0].identity, Some(Identity::from("ORD-001")));
        assert_eq!(view.rows[0].cells[4].text, "¥100");
        assert!(view.empty_message.is_none());
        assert!(view.actions.create);
    }

    #[test]
    fn test_sort_indicator_on_active_column() {
        let mut state = state();
        state.toggle_sort("total");
        state.toggle_sort("total");
        let (view, _) = render(EntityKind::Orders, state, &store()).unwrap();

        let total = view.headers.iter().find(|h| h.field == "total").unwrap();
        assert_eq!(total.text(), "Total ▼");
        assert_eq!(view.rows[0].cells[4].text, "¥2,500");
        assert!(view.headers.iter().filter(|h| h.sort.is_some()).count() == 1);
    }

    #[test]
    fn test_filter_selection_is_reported() {
        let mut state = state();
        state.set_filter(EntityKind::Orders, "status", Some(Value::from("Completed")));
        let (view, _) = render(EntityKind::Orders, state, &store()).unwrap();
        assert_eq!(view.total_matched, 5);
        let status = view.filters.iter().find(|f| f.field == "status").unwrap();
        assert_eq!(status.selected.as_deref(), Some("Completed"));
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let mut state = state();
        state.go_to_page(7).unwrap();
        let (view, state) = render(EntityKind::Orders, state, &store()).unwrap();
        assert_eq!(state.page(), 3);
        assert_eq!(view.rows.len(), 5);
        assert!(!view.pagination.next_enabled);
    }

    #[test]
    fn test_empty_search_shows_message() {
        let mut state = state();
        state.set_search("nobody");
        let (view, _) = render(EntityKind::Orders, state, &store()).unwrap();
        assert!(view.rows.is_empty());
        assert!(view.pagination.summary.is_none());
        assert_eq!(
            view.empty_message.as_deref(),
            Some("No orders match the current search or filters")
        );
    }

    #[test]
    fn test_empty_collection_message() {
        let (view, _) = render(EntityKind::Staff, ViewState::default(), &EntityStore::new()).unwrap();
        assert_eq!(view.empty_message.as_deref(), Some("No staff members yet"));
    }

    #[test]
    fn test_only_flagged_columns_sort() {
        let grid = GridView::for_kind(EntityKind::Orders);
        assert!(grid.is_sortable("total"));
        assert!(!grid.is_sortable("status"));
        let inventory = GridView::for_kind(EntityKind::Inventory);
        assert!(inventory.is_sortable("stock"));
    }
}
