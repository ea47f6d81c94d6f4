use eframe::egui;

use natality_dashboard::config::DashboardConfig;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NatalityApp {
    pub state: AppState,
}

impl NatalityApp {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: AppState::from_config(config),
        }
    }
}

impl eframe::App for NatalityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart above the filtered table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::header(ui);
            let Some(output) = panels::outcome_banner(ui, &self.state) else {
                return;
            };
            plot::births_chart(ui, &output.chart, self.state.color_map.as_ref());
            ui.separator();
            table::records_table(ui, &output.table);
        });
    }
}
