//! Frontend module for egui UI
//!
//! This is the rendering layer of the bond table. It owns a
//! [`StateBridge`] and never touches view state itself: the table view
//! returns [`TableCommand`]s, the menu bar returns [`AppAction`]s, and both
//! are applied after the frame is painted.
//!
//! # Main Types
//!
//! - [`BondGridApp`] - Main application state implementing [`eframe::App`]
//! - [`AppAction`] - Requests emitted by the UI
//!
//! # Submodules
//!
//! - [`table_view`] - Search box, sortable grid, pagination bar
//! - [`state`] - Action types

pub mod state;
pub mod table_view;

pub use state::AppAction;

use crate::columns::bond_columns;
use crate::config::{AppConfig, AppState};
use crate::source::{load_or_empty, JsonFileSource, RecordSource};
use crate::table::{StateBridge, TableCommand, ViewState};
use crate::types::Instrument;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Main application state
pub struct BondGridApp {
    bridge: StateBridge<Instrument>,
    config: AppConfig,
    app_state: AppState,
    /// Dataset currently shown, if it came from a file
    dataset_path: Option<PathBuf>,
    last_error: Option<String>,
}

impl BondGridApp {
    /// Create the application for eframe
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        app_state: AppState,
        records: Vec<Instrument>,
        dataset_path: Option<PathBuf>,
        last_error: Option<String>,
    ) -> Self {
        if config.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        Self::from_parts(config, app_state, records, dataset_path, last_error)
    }

    /// Build the application state without a UI context
    pub fn from_parts(
        config: AppConfig,
        app_state: AppState,
        records: Vec<Instrument>,
        dataset_path: Option<PathBuf>,
        last_error: Option<String>,
    ) -> Self {
        let state = ViewState::with_page_size(config.default_page_size);
        let bridge = StateBridge::with_state(records, bond_columns(), state);

        Self {
            bridge,
            config,
            app_state,
            dataset_path,
            last_error,
        }
    }

    pub fn bridge(&self) -> &StateBridge<Instrument> {
        &self.bridge
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn dataset_path(&self) -> Option<&PathBuf> {
        self.dataset_path.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply one UI action
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Table(command) => self.bridge.apply(command),
            AppAction::OpenDataset(path) => self.open_dataset(path),
            AppAction::ReloadDataset => {
                if let Some(path) = self.dataset_path.clone() {
                    self.open_dataset(path);
                } else {
                    tracing::debug!("No dataset file to reload");
                }
            }
            AppAction::ToggleDarkMode => {
                self.config.dark_mode = !self.config.dark_mode;
            }
            AppAction::ClearError => {
                self.last_error = None;
            }
        }
    }

    /// Load `path` and swap it into the table
    ///
    /// On failure the current records stay and the error is shown.
    fn open_dataset(&mut self, path: PathBuf) {
        let source = JsonFileSource::new(&path);
        match source.load() {
            Ok(records) => {
                self.bridge.replace_records(records);
                self.app_state.add_recent_dataset(&path);
                self.dataset_path = Some(path);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to open dataset {}: {}", source.describe(), e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn render_menu_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<AppAction>) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Dataset...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_title("Open Dataset")
                        .add_filter("JSON", &["json"])
                        .pick_file()
                    {
                        actions.push(AppAction::OpenDataset(path));
                    }
                    ui.close();
                }

                let recent: Vec<PathBuf> = self.app_state.recent_datasets.clone();
                ui.add_enabled_ui(!recent.is_empty(), |ui| {
                    ui.menu_button("Open Recent", |ui| {
                        for path in recent {
                            if ui.button(path.display().to_string()).clicked() {
                                actions.push(AppAction::OpenDataset(path));
                                ui.close();
                            }
                        }
                    });
                });

                if ui
                    .add_enabled(self.dataset_path.is_some(), egui::Button::new("Reload"))
                    .clicked()
                {
                    actions.push(AppAction::ReloadDataset);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let label = if self.config.dark_mode {
                    "Light Mode"
                } else {
                    "Dark Mode"
                };
                if ui.button(label).clicked() {
                    actions.push(AppAction::ToggleDarkMode);
                    ui.close();
                }
            });

            if let Some(path) = &self.dataset_path {
                ui.separator();
                ui.label(
                    RichText::new(path.display().to_string())
                        .small()
                        .color(Color32::from_rgb(150, 150, 200)),
                );
            }
        });
    }
}

impl eframe::App for BondGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<AppAction> = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui, &mut actions);
        });

        if let Some(error) = self.last_error.clone() {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(Color32::from_rgb(220, 80, 80), error);
                    if ui.small_button("✕").clicked() {
                        actions.push(AppAction::ClearError);
                    }
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let commands: Vec<TableCommand> =
                table_view::render(&self.bridge, &self.config.page_size_options, ui);
            actions.extend(commands.into_iter().map(AppAction::from));
        });

        let toggles_theme = actions.contains(&AppAction::ToggleDarkMode);
        for action in actions {
            self.handle_action(action);
        }

        if toggles_theme {
            if self.config.dark_mode {
                ctx.set_visuals(egui::Visuals::dark());
            } else {
                ctx.set_visuals(egui::Visuals::light());
            }
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save config: {}", e);
            }
        }
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}

/// Load the startup dataset.
///
/// Path precedence: `explicit`, then the last dataset opened in a previous
/// session, then the configured default.
pub fn load_startup_dataset(
    config: &AppConfig,
    app_state: &AppState,
    explicit: Option<PathBuf>,
) -> (Vec<Instrument>, PathBuf, Option<String>) {
    let path = explicit
        .or_else(|| app_state.last_dataset_path.clone())
        .unwrap_or_else(|| config.dataset_path.clone());
    let (records, error) = load_or_empty(&JsonFileSource::new(&path));
    (records, path, error)
}
