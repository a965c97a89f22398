//! Action types emitted by the UI
//!
//! Views return `AppAction`s instead of mutating state directly; the app
//! applies them once the frame is painted.

use std::path::PathBuf;

use crate::table::TableCommand;

/// Actions that any view can emit
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Forward a command to the table's state bridge
    Table(TableCommand),
    /// Load a dataset file and replace the table's records
    OpenDataset(PathBuf),
    /// Load the current dataset file again
    ReloadDataset,
    /// Switch between dark and light visuals
    ToggleDarkMode,
    /// Dismiss the error line
    ClearError,
}

impl From<TableCommand> for AppAction {
    fn from(command: TableCommand) -> Self {
        AppAction::Table(command)
    }
}
