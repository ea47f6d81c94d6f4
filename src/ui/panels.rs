use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use natality_dashboard::data::filter::ALL;
use natality_dashboard::pipeline::RenderOutput;
use natality_dashboard::PipelineError;

use crate::state::{AppState, Dimension};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Collect clicks first, apply after the widgets are drawn.
    let mut toggled: Vec<(Dimension, String)> = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for dim in Dimension::ALL {
                let chosen = state.choices(dim);
                let header_text = if chosen.is_empty() {
                    format!("{}  (none)", dim.label())
                } else {
                    format!("{}  ({})", dim.label(), chosen.join(", "))
                };

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(dim.label())
                    .default_open(dim == Dimension::Gender)
                    .show(ui, |ui: &mut Ui| {
                        let values = std::iter::once(ALL).chain(
                            state.options_for(dim).iter().map(String::as_str),
                        );
                        for val in values {
                            let mut checked = state.is_chosen(dim, val);
                            let mut text = RichText::new(val);
                            if dim == Dimension::Gender && val != ALL {
                                if let Some(cm) = &state.color_map {
                                    text = text.color(cm.color_for(val));
                                }
                            }
                            if ui.checkbox(&mut checked, text).changed() {
                                toggled.push((dim, val.to_string()));
                            }
                        }
                    });
            }
        });

    for (dim, val) in toggled {
        state.toggle_choice(dim, &val);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.output().is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export chart spec…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let (shown, births) = state
                .output()
                .map(|o| (o.table.len(), o.table.total_births()))
                .unwrap_or((0, 0.0));
            ui.label(format!(
                "{} records loaded, {} shown ({} births), {} dropped (invalid births)",
                ds.len(),
                shown,
                births,
                state.dropped_rows
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel pieces
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading("Provisional Natality Data Dashboard");
    ui.label(RichText::new("Birth Analysis by State and Gender").size(16.0));
    ui.add_space(6.0);
}

/// Show the error or warning of the last run, or hand back its output.
pub fn outcome_banner<'a>(ui: &mut Ui, state: &'a AppState) -> Option<&'a RenderOutput> {
    match &state.outcome {
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV file to view births  (File → Open…)");
            });
            None
        }
        Some(Ok(output)) => Some(output),
        Some(Err(e)) if e.is_warning() => {
            ui.colored_label(Color32::YELLOW, e.to_string());
            None
        }
        Some(Err(e)) => {
            ui.colored_label(Color32::RED, e.to_string());
            if let PipelineError::Schema { observed, .. } = e {
                ui.label("Actual columns in dataset:");
                for col in observed {
                    ui.monospace(col);
                }
            }
            None
        }
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open natality data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart specification")
        .add_filter("JSON", &["json"])
        .set_file_name("births_by_state_and_gender.json")
        .save_file();

    if let Some(path) = file {
        state.status_message = Some(match state.export_chart(&path) {
            Ok(()) => format!("Exported {}", path.display()),
            Err(e) => {
                log::error!("Export failed: {e:#}");
                format!("Error: {e:#}")
            }
        });
    }
}
