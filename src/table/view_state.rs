//! View state: the filter, sort and pagination currently requested.
//!
//! A plain record. The [`StateBridge`](super::bridge::StateBridge) is the only
//! writer; everything else reads it through the bridge.

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active single-column sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    pub column_id: &'static str,
    pub direction: SortDirection,
}

/// Requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    /// Always positive once it has passed through the bridge
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Filter, sort and pagination for one table instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub global_filter: String,
    pub sort: Option<SortDescriptor>,
    pub pagination: Pagination,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default state with a custom page size (non-positive becomes 1)
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: Pagination {
                page_index: 0,
                page_size: page_size.max(1),
            },
            ..Self::default()
        }
    }
}
