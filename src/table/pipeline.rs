//! Row-model pipeline: records → filtered → sorted → page window.
//!
//! Every stage is a pure function over row indices into the record slice, so
//! records are never cloned or moved. [`compute`] chains the three stages and
//! produces a [`DerivedView`].
//!
//! ```text
//! records ──► filter_stage ──► sort_stage ──► page_window ──► DerivedView
//! ```

use super::column::ColumnRegistry;
use super::value::CellValue;
use super::view_state::{Pagination, SortDescriptor, SortDirection, ViewState};
use std::cmp::Ordering;

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Indices into the record slice for the rows of the current page, in order
    pub page_rows: Vec<usize>,
    /// Rows that passed the filter
    pub total_filtered_count: usize,
    /// Always at least 1
    pub page_count: usize,
    /// Effective page index, always below `page_count`
    pub page_index: usize,
    pub page_size: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl DerivedView {
    /// Resolve the page's row indices against the record slice they were
    /// computed from.
    pub fn rows<'a, R>(&'a self, records: &'a [R]) -> impl Iterator<Item = &'a R> + 'a {
        self.page_rows.iter().filter_map(move |&i| records.get(i))
    }
}

/// Index range of one page within the sorted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: usize,
    pub page_count: usize,
    pub start: usize,
    pub end: usize,
}

/// Keep the rows where any column's text form contains `filter`.
///
/// The filter is trimmed and compared case-insensitively. An empty filter
/// keeps every row in input order. Missing values never match.
pub fn filter_stage<R>(records: &[R], columns: &ColumnRegistry<R>, filter: &str) -> Vec<usize> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return (0..records.len()).collect();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            columns.all().iter().any(|col| {
                col.accessor
                    .read(*record)
                    .is_some_and(|value| value.search_text().contains(&needle))
            })
        })
        .map(|(i, _)| i)
        .collect()
}

/// Stable-sort `rows` by the active sort column.
///
/// With no sort, or a sort on an unknown column, `rows` keeps its order.
/// Missing values go last in both directions; the direction only flips the
/// comparison between present values.
pub fn sort_stage<R>(
    records: &[R],
    columns: &ColumnRegistry<R>,
    rows: &mut [usize],
    sort: Option<&SortDescriptor>,
) {
    let Some(sort) = sort else { return };
    let Some(column) = columns.get(sort.column_id) else {
        return;
    };

    let mut keyed: Vec<(usize, Option<CellValue<'_>>)> = rows
        .iter()
        .map(|&i| (i, records.get(i).and_then(|r| column.accessor.read(r))))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| compare_keys(a.as_ref(), b.as_ref(), sort.direction));

    for (slot, (i, _)) in rows.iter_mut().zip(keyed) {
        *slot = i;
    }
}

fn compare_keys(
    a: Option<&CellValue<'_>>,
    b: Option<&CellValue<'_>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compute the page window for `total` sorted rows.
///
/// An out-of-range page index is clamped to the last page. A zero page size
/// is read as 1.
pub fn page_window(total: usize, pagination: Pagination) -> PageWindow {
    let page_size = pagination.page_size.max(1);
    let page_count = total.div_ceil(page_size).max(1);
    let page_index = pagination.page_index.min(page_count - 1);
    let start = page_index.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    PageWindow {
        page_index,
        page_count,
        start,
        end,
    }
}

/// Run all three stages.
pub fn compute<R>(records: &[R], columns: &ColumnRegistry<R>, state: &ViewState) -> DerivedView {
    let mut rows = filter_stage(records, columns, &state.global_filter);
    sort_stage(records, columns, &mut rows, state.sort.as_ref());

    let window = page_window(rows.len(), state.pagination);
    debug_assert!(window.page_count >= 1);
    debug_assert!(window.page_index < window.page_count);

    DerivedView {
        page_rows: rows[window.start..window.end].to_vec(),
        total_filtered_count: rows.len(),
        page_count: window.page_count,
        page_index: window.page_index,
        page_size: state.pagination.page_size.max(1),
        can_prev: window.page_index > 0,
        can_next: window.page_index + 1 < window.page_count,
    }
}
