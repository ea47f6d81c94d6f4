use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use natality_dashboard::chart::ChartSpec;

use crate::color::ColorMap;

/// Share of each state's slot taken by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Grouped bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the births-by-state chart, one bar per gender within each state.
pub fn births_chart(ui: &mut Ui, spec: &ChartSpec, color_map: Option<&ColorMap>) {
    ui.label(RichText::new(&spec.title).strong().size(15.0));

    let n_series = spec.series.len().max(1) as f64;
    let bar_width = GROUP_WIDTH / n_series;

    let charts: Vec<BarChart> = spec
        .series
        .iter()
        .enumerate()
        .map(|(s, series)| {
            let offset = -GROUP_WIDTH / 2.0 + bar_width * (s as f64 + 0.5);
            let bars: Vec<Bar> = series
                .values
                .iter()
                .enumerate()
                .filter_map(|(i, v)| {
                    let v = (*v)?;
                    Some(
                        Bar::new(i as f64 + offset, v)
                            .width(bar_width)
                            .name(format!("{} {}", spec.categories[i], series.name)),
                    )
                })
                .collect();
            let color = color_map
                .map(|cm| cm.color_for(&series.name))
                .unwrap_or(Color32::LIGHT_BLUE);
            BarChart::new(bars)
                .name(format!("{}: {}", spec.legend_title, series.name))
                .color(color)
        })
        .collect();

    let categories = spec.categories.clone();
    Plot::new("births_chart")
        .legend(Legend::default())
        .height(360.0)
        .x_axis_label(spec.x_axis_label.as_str())
        .y_axis_label(spec.y_axis_label.as_str())
        .x_axis_formatter(move |mark: GridMark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            categories.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
