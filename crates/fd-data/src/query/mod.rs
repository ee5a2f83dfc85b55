//! Query pipeline: filter, then sort, then paginate
//!
//! Every stage borrows the records; nothing is cloned until a caller asks
//! for owned data.

use std::cmp::Ordering;

use fd_core::{EntityKind, FilterSet, Record, SortSpec, StateError, ViewState};
use tracing::debug;


/// Parameters of one pipeline run
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub filters: Option<&'a FilterSet>,
    pub search: &'a str,
    pub sort: &'a SortSpec,
    pub page: usize,
    pub page_size: usize,
}

impl<'a> Query<'a> {
    /// Query for the entity `kind` as described by `state`
    pub fn for_view(kind: EntityKind, state: &'a ViewState) -> Self {
        Self {
            filters: state.filters_for(kind),
            search: state.search_term(),
            sort: state.sort(),
            page: state.page(),
            page_size: state.page_size(),
        }
    }

    /// Filter and sort without paginating
    pub fn matching<'r>(&self, records: &'r [Record]) -> Vec<&'r Record> {
        let mut matched = filter(records, self.filters, self.search);
        sort(&mut matched, self.sort);
        matched
    }

    /// Run all three stages
    pub fn run<'r>(&self, records: &'r [Record]) -> Result<QueryResult<'r>, StateError> {
        if self.page_size == 0 {
            return Err(StateError::InvalidPageSize(self.page_size));
        }
        if self.page == 0 {
            return Err(StateError::InvalidPage(self.page));
        }

        let matched = self.matching(records);
        let total_matched = matched.len();
        let page = paginate(&matched, self.page, self.page_size).to_vec();
        debug!(
            total = records.len(),
            total_matched,
            page = self.page,
            shown = page.len(),
            "query evaluated"
        );
        Ok(QueryResult {
            page,
            total_matched,
        })
    }
}

/// One page of matching records and the size of the whole match
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'r> {
    pub page: Vec<&'r Record>,
    pub total_matched: usize,
}

/// Whether `record` satisfies every filter and the search term
pub fn matches(record: &Record, filters: Option<&FilterSet>, search_lower: &str) -> bool {
    let filters_ok = filters.map_or(true, |filters| {
        filters
            .iter()
            .filter(|(_, accepted)| !accepted.is_empty())
            .all(|(field, accepted)| record.get(field) == Some(accepted))
    });
    filters_ok && (search_lower.is_empty() || record.matches_search(search_lower))
}

/// Keep records matching every filter and the search term, in input order
pub fn filter<'r>(records: &'r [Record], filters: Option<&FilterSet>, search: &str) -> Vec<&'r Record> {
    let search_lower = search.to_lowercase();
    records
        .iter()
        .filter(|r| matches(r, filters, &search_lower))
        .collect()
}

/// Stable sort by the active sort field; a no-op when none is set
pub fn sort(records: &mut [&Record], spec: &SortSpec) {
    let Some(field) = spec.field.as_deref() else {
        return;
    };
    records.sort_by(|a, b| spec.direction.apply(compare_field(a, b, field)));
}

fn compare_field(a: &Record, b: &Record, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(x), Some(y)) => x.sort_cmp(y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Slice `(page - 1) * page_size .. page * page_size`, clamped to the input
pub fn paginate<'s, T>(items: &'s [T], page: usize, page_size: usize) -> &'s [T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(total / page_size)`; zero when there is nothing to show
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
