use std::collections::BTreeMap;

use serde::Serialize;

use super::model::Dataset;

/// Summed births for one observed (state, gender) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub state: String,
    pub gender: String,
    pub total_births: f64,
}

/// Group records by (state, gender) and sum `births`.
///
/// Only observed pairs are emitted; unobserved combinations are not zero-filled.
/// Records with an empty state or gender are left out of the grouping. Output
/// is ordered by state, then gender.
pub fn aggregate_by_state_and_gender(dataset: &Dataset) -> Vec<AggregatedRow> {
    let mut groups: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for r in &dataset.records {
        if r.state.is_empty() || r.gender.is_empty() {
            continue;
        }
        *groups.entry((r.state.as_str(), r.gender.as_str())).or_default() += r.births;
    }

    groups
        .into_iter()
        .map(|((state, gender), total_births)| AggregatedRow {
            state: state.to_string(),
            gender: gender.to_string(),
            total_births,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::Record;

    fn dataset(rows: &[(&str, &str, f64)]) -> Dataset {
        let records = rows
            .iter()
            .map(|&(state, gender, births)| Record {
                state: state.into(),
                month: "January".into(),
                month_code: "1".into(),
                year_code: "2025".into(),
                gender: gender.into(),
                births,
                cells: Vec::new(),
            })
            .collect();
        Dataset::new(Vec::new(), records)
    }

    fn row(state: &str, gender: &str, total_births: f64) -> AggregatedRow {
        AggregatedRow {
            state: state.into(),
            gender: gender.into(),
            total_births,
        }
    }

    #[test]
    fn sums_per_state_and_gender() {
        let ds = dataset(&[("CA", "F", 10.0), ("CA", "F", 5.0), ("CA", "M", 3.0), ("TX", "F", 2.0)]);
        assert_eq!(
            aggregate_by_state_and_gender(&ds),
            vec![row("CA", "F", 15.0), row("CA", "M", 3.0), row("TX", "F", 2.0)]
        );
    }

    #[test]
    fn output_is_sorted_by_state_regardless_of_input_order() {
        let ds = dataset(&[("WA", "M", 1.0), ("AL", "F", 2.0), ("NY", "F", 3.0), ("AL", "M", 4.0)]);
        let states: Vec<String> = aggregate_by_state_and_gender(&ds)
            .into_iter()
            .map(|r| r.state)
            .collect();
        assert_eq!(states, vec!["AL", "AL", "NY", "WA"]);
    }

    #[test]
    fn unobserved_pairs_are_not_zero_filled() {
        let ds = dataset(&[("CA", "F", 1.0), ("TX", "M", 1.0)]);
        assert_eq!(aggregate_by_state_and_gender(&ds).len(), 2);
    }

    #[test]
    fn blank_keys_are_not_grouped() {
        let ds = dataset(&[("CA", "F", 1.0), ("", "F", 9.0), ("CA", "", 9.0)]);
        assert_eq!(aggregate_by_state_and_gender(&ds), vec![row("CA", "F", 1.0)]);
    }
}
