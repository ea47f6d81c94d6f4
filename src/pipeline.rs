use std::path::Path;

use crate::chart::ChartSpec;
use crate::data::aggregate::{AggregatedRow, aggregate_by_state_and_gender};
use crate::data::filter::{Selections, apply_filters};
use crate::data::loader::load_csv;
use crate::data::model::{Dataset, RawTable};
use crate::data::schema::{Normalized, normalize};
use crate::error::PipelineError;

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub chart: ChartSpec,
    pub aggregated: Vec<AggregatedRow>,
    /// Filtered, non-aggregated records in original order.
    pub table: Dataset,
}

/// Read and normalize the dataset at `path`.
pub fn load_and_normalize(path: &Path) -> Result<Normalized, PipelineError> {
    let raw = load_csv(path)?;
    normalize(raw)
}

/// Full run: normalize → filter → aggregate → chart.
pub fn render(raw: &RawTable, selections: &Selections) -> Result<RenderOutput, PipelineError> {
    let normalized = normalize(raw.clone())?;
    render_dataset(&normalized.dataset, selections)
}

/// Filter → aggregate → chart over an already normalized dataset.
///
/// Stops with [`PipelineError::EmptyResult`] before aggregating when the
/// selections keep nothing.
pub fn render_dataset(
    dataset: &Dataset,
    selections: &Selections,
) -> Result<RenderOutput, PipelineError> {
    let table = apply_filters(dataset, selections)?;
    let aggregated = aggregate_by_state_and_gender(&table);
    let chart = ChartSpec::grouped_bar(&aggregated);
    log::info!(
        "Rendered {} of {} records into {} groups",
        table.len(),
        dataset.len(),
        aggregated.len()
    );
    Ok(RenderOutput {
        chart,
        aggregated,
        table,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::filter::Selection;

    const CSV: &str = "\
State of Residence,Month,Month Code,Year Code,Sex of Infant,Births
CA,January,1,2025,F,10
CA,February,2,2025,F,5
CA,January,1,2025,M,3
TX,January,1,2025,F,2
TX,March,3,2025,M,N/A
NY,January,1,2025,M,8
";

    fn raw() -> RawTable {
        crate::data::loader::read_csv(CSV.as_bytes()).unwrap()
    }

    #[test]
    fn full_run_with_state_and_gender_filters() {
        let selections = Selections {
            state: Selection::from_choices(["CA", "TX"]),
            gender: Selection::from_choices(["F"]),
            ..Default::default()
        };
        let out = render(&raw(), &selections).unwrap();
        assert_eq!(out.table.len(), 3);
        assert_eq!(
            out.aggregated,
            vec![
                AggregatedRow {
                    state: "CA".into(),
                    gender: "F".into(),
                    total_births: 15.0
                },
                AggregatedRow {
                    state: "TX".into(),
                    gender: "F".into(),
                    total_births: 2.0
                },
            ]
        );
        assert_eq!(out.chart.categories, vec!["CA", "TX"]);
    }

    #[test]
    fn unrestricted_run_keeps_every_valid_row() {
        let out = render(&raw(), &Selections::default()).unwrap();
        assert_eq!(out.table.len(), 5);
        assert_eq!(out.table.total_births(), 28.0);
        assert_eq!(out.table.columns[0], "state_of_residence");
    }

    #[test]
    fn empty_selection_result_halts_before_aggregation() {
        let selections = Selections {
            state: Selection::from_choices(["WY"]),
            ..Default::default()
        };
        let err = render(&raw(), &selections).unwrap_err();
        assert!(err.is_warning());
    }

    #[test]
    fn schema_error_stops_the_run() {
        let raw = RawTable::new(vec!["state".into(), "births".into()], vec![]);
        assert!(matches!(
            render(&raw, &Selections::default()),
            Err(PipelineError::Schema { .. })
        ));
    }

    #[test]
    fn all_rows_invalid_reaches_filter_as_empty_dataset() {
        let raw = crate::data::loader::read_csv(
            "state of residence,month,month code,year code,sex of infant,births\nCA,Jan,1,2025,F,x\n"
                .as_bytes(),
        )
        .unwrap();
        assert!(matches!(
            render(&raw, &Selections::default()),
            Err(PipelineError::EmptyResult)
        ));
    }

    #[test]
    fn load_and_normalize_reports_dropped_rows() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(CSV.as_bytes()).unwrap();
        let normalized = load_and_normalize(tmp.path()).unwrap();
        assert_eq!(normalized.dropped_rows, 1);
        assert_eq!(normalized.dataset.len(), 5);
    }
}
