// Engine module - pure display logic between schemas (types) and CLI presentation.
// Everything here is synchronous and total: no IO, no shared state, no errors.

pub mod list;
pub mod narrative;
pub mod summary;

pub use list::{
    Filterable, ListFilter, SortConfig, SortDirection, SortSource, SortValue, cycle_sort,
    filter_items, sort_items,
};
pub use narrative::{Badge, EMPTY_BODY_PLACEHOLDER, Segment, interpret_body};
pub use summary::{PhaseSlice, PipelineSummary, summarize_offers};

// Façade API - stable entry point for the CLI layer

/// Derive the visible rows of a list view: unconditional constraints and
/// user filters first, then the configured sort (default order when `sort`
/// is `None`).
pub fn build_list<T: Filterable + SortSource>(
    items: Vec<T>,
    filter: &ListFilter,
    sort: Option<&SortConfig>,
) -> Vec<T> {
    let mut items = filter_items(items, filter);
    sort_items(&mut items, sort);
    items
}
