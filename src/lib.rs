//! # BondGrid-RS: Interactive Bond Table
//!
//! A table of bond instruments with global text search, single-column
//! sorting and pagination.
//!
//! ## Architecture
//!
//! - **Table engine** (`table`): column registry, the filter → sort →
//!   paginate pipeline, view state, and the state bridge the UI talks to
//! - **Records** (`types`, `columns`): instrument model and the bond column set
//! - **Source** (`source`): loads `{ "data": [...] }` JSON datasets
//! - **Frontend** (`frontend`): eframe/egui rendering layer
//!
//! ## Configuration
//!
//! Configuration (`bondgrid.toml`) and recent datasets (`app_state.json`) are
//! stored in the platform-appropriate data directory under
//! `dev.bondgrid.bondgrid-rs`.
//!
//! ## Example
//!
//! ```ignore
//! use bondgrid_rs::{bond_columns, JsonFileSource, RecordSource, StateBridge};
//!
//! let records = JsonFileSource::new("assets/bonds.json").load()?;
//! let mut table = StateBridge::new(records, bond_columns());
//!
//! table.set_global_filter("bund");
//! table.toggle_sort("bond.couponRate");
//! for bond in table.page_rows() {
//!     println!("{} {}", bond.core.isin, bond.core.name);
//! }
//! ```

pub mod columns;
pub mod config;
pub mod error;
pub mod frontend;
pub mod source;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use columns::bond_columns;
pub use config::{AppConfig, AppState};
pub use error::{BondGridError, Result};
pub use frontend::BondGridApp;
pub use source::{JsonFileSource, RecordSource};
pub use table::{ColumnRegistry, DerivedView, StateBridge, TableCommand, ViewState};
pub use types::{BondFacet, Core, Instrument};
