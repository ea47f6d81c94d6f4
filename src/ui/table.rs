use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use natality_dashboard::data::model::Dataset;

const ROW_HEIGHT: f32 = 18.0;

/// Filtered (non-aggregated) records, all columns in source order.
pub fn records_table(ui: &mut Ui, dataset: &Dataset) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(80.0), dataset.columns.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for col in &dataset.columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, dataset.len(), |mut row| {
                let record = &dataset.records[row.index()];
                for cell in &record.cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
