//! Table view - search box, sortable grid and pagination bar
//!
//! Reads everything from the [`StateBridge`] and returns the user's gestures
//! as [`TableCommand`]s instead of mutating state.

use egui::{Color32, RichText, Ui};

use crate::table::{CellValue, SortIndicator, StateBridge, TableCommand};

/// Label suffix for a column's sort state
pub fn sort_suffix(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::None => "",
        SortIndicator::Ascending => " 🔼",
        SortIndicator::Descending => " 🔽",
    }
}

/// Text shown for a cell
pub fn cell_text(value: Option<CellValue<'_>>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "—".to_string(),
    }
}

/// Render the table and collect the commands it produced this frame
pub fn render<R>(
    bridge: &StateBridge<R>,
    page_size_options: &[usize],
    ui: &mut Ui,
) -> Vec<TableCommand> {
    let mut commands = Vec::new();

    render_search(bridge, ui, &mut commands);
    ui.separator();

    let columns = bridge.columns().all();
    let view = bridge.view();

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 40.0).max(100.0))
        .show(ui, |ui| {
            egui::Grid::new("bond_table_grid")
                .num_columns(columns.len())
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for col in columns {
                        let label = format!("{}{}", col.header, sort_suffix(bridge.sort_indicator(col.id)));
                        if col.sortable {
                            let clicked = ui
                                .add(egui::Button::new(RichText::new(label).strong()).frame(false))
                                .on_hover_text("Click to sort")
                                .clicked();
                            if clicked {
                                commands.push(TableCommand::ToggleSort(col.id.to_string()));
                            }
                        } else {
                            ui.strong(label);
                        }
                    }
                    ui.end_row();

                    for record in bridge.page_rows() {
                        for col in columns {
                            let value = col.accessor.read(record);
                            let text = RichText::new(cell_text(value));
                            match value {
                                Some(CellValue::Number(_)) => ui.label(text.monospace()),
                                Some(_) => ui.label(text),
                                None => ui.label(text.color(Color32::GRAY)),
                            };
                        }
                        ui.end_row();
                    }
                });

            if view.page_rows.is_empty() {
                ui.add_space(20.0);
                ui.colored_label(Color32::GRAY, "No matching rows");
            }
        });

    ui.separator();
    render_pagination(bridge, page_size_options, ui, &mut commands);

    commands
}

fn render_search<R>(bridge: &StateBridge<R>, ui: &mut Ui, commands: &mut Vec<TableCommand>) {
    ui.horizontal(|ui| {
        let mut text = bridge.global_filter().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Search...")
                .desired_width(260.0),
        );
        if response.changed() {
            commands.push(TableCommand::SetGlobalFilter(text));
        }

        ui.label(
            RichText::new(format!(
                "{} of {} rows",
                bridge.view().total_filtered_count,
                bridge.records().len()
            ))
            .small()
            .color(Color32::GRAY),
        );
    });
}

fn render_pagination<R>(
    bridge: &StateBridge<R>,
    page_size_options: &[usize],
    ui: &mut Ui,
    commands: &mut Vec<TableCommand>,
) {
    let view = bridge.view();

    ui.horizontal(|ui| {
        if ui.add_enabled(view.can_prev, egui::Button::new("Prev")).clicked() {
            commands.push(TableCommand::PreviousPage);
        }

        ui.label(format!("Page {} of {}", view.page_index + 1, view.page_count));

        if ui.add_enabled(view.can_next, egui::Button::new("Next")).clicked() {
            commands.push(TableCommand::NextPage);
        }

        ui.separator();

        egui::ComboBox::from_id_salt("page_size_selector")
            .selected_text(view.page_size.to_string())
            .width(60.0)
            .show_ui(ui, |ui| {
                for &size in page_size_options {
                    if ui
                        .selectable_label(size == view.page_size, size.to_string())
                        .clicked()
                    {
                        commands.push(TableCommand::SetPageSize(
                            i64::try_from(size).unwrap_or(i64::MAX),
                        ));
                    }
                }
            })
            .response
            .on_hover_text("Rows on page");
    });
}
