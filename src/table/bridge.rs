//! Boundary between the table engine and the rendering layer.
//!
//! `StateBridge` owns the records, the column registry, the [`ViewState`] and
//! the most recent [`DerivedView`]. The rendering layer reads the derived view
//! and requests changes through the mutators (or by sending
//! [`TableCommand`]s to [`StateBridge::apply`]). Each mutator updates the view
//! state, clamps pagination and recomputes the view before it returns, so a
//! read after a write always sees that write.
//!
//! No operation here fails. Out-of-range input is clamped or coerced to the
//! nearest valid state.

use super::column::ColumnRegistry;
use super::pipeline::{self, DerivedView};
use super::view_state::{SortDescriptor, SortDirection, ViewState};

/// Mutation requests coming from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    /// Replace the global search text
    SetGlobalFilter(String),
    /// Advance the sort cycle of a column (unset → asc → desc → unset)
    ToggleSort(String),
    /// Jump to a page; clamped into range
    SetPageIndex(i64),
    NextPage,
    PreviousPage,
    /// Change rows per page; non-positive becomes 1
    SetPageSize(i64),
}

/// Per-column sort state shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    None,
    Ascending,
    Descending,
}

/// Owns the table state and keeps the derived view current.
pub struct StateBridge<R> {
    records: Vec<R>,
    columns: ColumnRegistry<R>,
    state: ViewState,
    view: DerivedView,
}

impl<R> StateBridge<R> {
    /// Create a bridge with the default view state.
    pub fn new(records: Vec<R>, columns: ColumnRegistry<R>) -> Self {
        Self::with_state(records, columns, ViewState::default())
    }

    /// Create a bridge starting from `state`, normalized to a valid state.
    pub fn with_state(records: Vec<R>, columns: ColumnRegistry<R>, mut state: ViewState) -> Self {
        state.pagination.page_size = state.pagination.page_size.max(1);
        if let Some(sort) = &state.sort {
            if !columns.is_sortable(sort.column_id) {
                tracing::warn!("Dropping sort on non-sortable column {:?}", sort.column_id);
                state.sort = None;
            }
        }

        let view = pipeline::compute(&records, &columns, &state);
        let mut bridge = Self {
            records,
            columns,
            state,
            view,
        };
        bridge.state.pagination.page_index = bridge.view.page_index;
        bridge
    }

    // --- Reads ---

    /// The most recent derived view. Never recomputes.
    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Records on the current page, in display order.
    pub fn page_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.view.rows(&self.records)
    }

    pub fn sort_indicator(&self, column_id: &str) -> SortIndicator {
        match &self.state.sort {
            Some(sort) if sort.column_id == column_id => match sort.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::None,
        }
    }

    pub fn global_filter(&self) -> &str {
        &self.state.global_filter
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn columns(&self) -> &ColumnRegistry<R> {
        &self.columns
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    // --- Mutators ---

    /// Set the global search text and go back to the first page.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.state.global_filter = text.into();
        self.state.pagination.page_index = 0;
        self.recompute();
    }

    /// Advance the sort cycle for `column_id`.
    ///
    /// A different column replaces the current sort, starting ascending.
    /// Non-sortable and unknown columns are ignored. Any sort change returns
    /// to the first page.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let id = match self.columns.get(column_id) {
            Some(col) if col.sortable => col.id,
            _ => {
                tracing::trace!("Ignoring sort toggle on {:?}", column_id);
                return;
            }
        };

        self.state.sort = match self.state.sort.take() {
            Some(current) if current.column_id == id => match current.direction {
                SortDirection::Ascending => Some(SortDescriptor {
                    column_id: id,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortDescriptor {
                column_id: id,
                direction: SortDirection::Ascending,
            }),
        };
        self.state.pagination.page_index = 0;
        self.recompute();
    }

    /// Jump to page `index`, clamped into `[0, page_count - 1]`.
    pub fn set_page_index(&mut self, index: i64) {
        let last = self.view.page_count - 1;
        let index = usize::try_from(index.max(0)).unwrap_or(usize::MAX);
        self.state.pagination.page_index = index.min(last);
        self.recompute();
    }

    pub fn next_page(&mut self) {
        if !self.view.can_next {
            tracing::trace!("Already on last page");
            return;
        }
        self.state.pagination.page_index = self.view.page_index + 1;
        self.recompute();
    }

    pub fn previous_page(&mut self) {
        if !self.view.can_prev {
            tracing::trace!("Already on first page");
            return;
        }
        self.state.pagination.page_index = self.view.page_index - 1;
        self.recompute();
    }

    /// Set rows per page. Non-positive sizes become 1. The page index only
    /// moves if it falls out of range.
    pub fn set_page_size(&mut self, size: i64) {
        let size = usize::try_from(size).ok().filter(|&s| s > 0).unwrap_or(1);
        self.state.pagination.page_size = size;
        self.recompute();
    }

    /// Swap the dataset. Filter, sort and page size are kept; the page index
    /// returns to 0.
    pub fn replace_records(&mut self, records: Vec<R>) {
        tracing::info!("Replacing {} records with {}", self.records.len(), records.len());
        self.records = records;
        self.state.pagination.page_index = 0;
        self.recompute();
    }

    /// Dispatch a rendering-layer command to its mutator.
    pub fn apply(&mut self, command: TableCommand) {
        match command {
            TableCommand::SetGlobalFilter(text) => self.set_global_filter(text),
            TableCommand::ToggleSort(column_id) => self.toggle_sort(&column_id),
            TableCommand::SetPageIndex(index) => self.set_page_index(index),
            TableCommand::NextPage => self.next_page(),
            TableCommand::PreviousPage => self.previous_page(),
            TableCommand::SetPageSize(size) => self.set_page_size(size),
        }
    }

    fn recompute(&mut self) {
        self.view = pipeline::compute(&self.records, &self.columns, &self.state);
        // Persist the clamp so the stored index never points past the end.
        self.state.pagination.page_index = self.view.page_index;

        tracing::debug!(
            filtered = self.view.total_filtered_count,
            page = self.view.page_index,
            pages = self.view.page_count,
            "Recomputed table view"
        );
    }
}
