//! Tabular-data engine: global search, single-column sort and pagination.
//!
//! # Architecture
//!
//! ```text
//!  rendering layer ──TableCommand──► [StateBridge] ──► ViewState
//!        ▲                                │
//!        │                                ▼
//!        └──── DerivedView ◄── [pipeline: filter → sort → paginate]
//!                                         ▲
//!                       records + [ColumnRegistry]
//! ```
//!
//! # Design
//!
//! - **Typed accessors** — each column carries a text/number/date read
//!   function; the comparator follows from that tag.
//! - **Index-based pipeline** — stages pass row indices, records stay put.
//! - **Eager recompute** — every mutator recomputes before returning; reads
//!   never compute.
//! - **No error path** — input is clamped or coerced, never rejected.

pub mod bridge;
pub mod column;
pub mod pipeline;
pub mod value;
pub mod view_state;

pub use bridge::{SortIndicator, StateBridge, TableCommand};
pub use column::{Accessor, ColumnDef, ColumnRegistry, ValueKind};
pub use pipeline::{compute, filter_stage, page_window, sort_stage, DerivedView, PageWindow};
pub use value::CellValue;
pub use view_state::{Pagination, SortDescriptor, SortDirection, ViewState, DEFAULT_PAGE_SIZE};
