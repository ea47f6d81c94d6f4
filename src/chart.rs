use std::collections::BTreeSet;

use serde::Serialize;

use crate::data::aggregate::AggregatedRow;

pub const CHART_TITLE: &str = "Total Births by State and Gender";
pub const X_AXIS_LABEL: &str = "State of Residence";
pub const Y_AXIS_LABEL: &str = "Total Births";
pub const LEGEND_TITLE: &str = "Gender";

// ---------------------------------------------------------------------------
// Grouped bar chart specification
// ---------------------------------------------------------------------------

/// One bar series (one gender). `values[i]` belongs to `ChartSpec::categories[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    /// `None` where the (state, gender) pair was not observed.
    pub values: Vec<Option<f64>>,
}

/// Renderer-independent description of the grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub legend_title: String,
    /// States in ascending order.
    pub categories: Vec<String>,
    /// One series per gender, in ascending order.
    pub series: Vec<BarSeries>,
}

impl ChartSpec {
    /// x = state, y = summed births, grouped by gender.
    pub fn grouped_bar(rows: &[AggregatedRow]) -> Self {
        let categories: Vec<String> = rows
            .iter()
            .map(|r| r.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let genders: BTreeSet<&str> = rows.iter().map(|r| r.gender.as_str()).collect();

        let series = genders
            .into_iter()
            .map(|gender| {
                let mut values = vec![None; categories.len()];
                for row in rows.iter().filter(|r| r.gender == gender) {
                    if let Ok(i) = categories.binary_search(&row.state) {
                        *values[i].get_or_insert(0.0) += row.total_births;
                    }
                }
                BarSeries {
                    name: gender.to_string(),
                    values,
                }
            })
            .collect();

        ChartSpec {
            title: CHART_TITLE.to_string(),
            x_axis_label: X_AXIS_LABEL.to_string(),
            y_axis_label: Y_AXIS_LABEL.to_string(),
            legend_title: LEGEND_TITLE.to_string(),
            categories,
            series,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
