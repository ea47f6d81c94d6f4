use std::collections::BTreeSet;

use super::model::{Dataset, Record};
use crate::error::PipelineError;

/// Choice label meaning "do not restrict this dimension".
pub const ALL: &str = "All";

// ---------------------------------------------------------------------------
// Selection: which values are allowed for one dimension
// ---------------------------------------------------------------------------

/// Per-dimension restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No restriction, every record passes.
    #[default]
    All,
    /// Only records whose value is in the set pass.
    Only(BTreeSet<String>),
}

impl Selection {
    /// Build a selection from raw multiselect choices.
    ///
    /// An [`ALL`] choice anywhere in the list wins over concrete values. An
    /// empty list selects nothing.
    pub fn from_choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = BTreeSet::new();
        for choice in choices {
            let choice = choice.into();
            if choice == ALL {
                return Selection::All;
            }
            values.insert(choice);
        }
        Selection::Only(values)
    }

    /// Whether `value` passes this dimension's test.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.contains(value),
        }
    }
}

/// One selection per filterable dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    pub state: Selection,
    pub month: Selection,
    pub gender: Selection,
}

impl Selections {
    /// A record is kept only when every dimension passes.
    pub fn matches(&self, record: &Record) -> bool {
        self.state.matches(&record.state)
            && self.month.matches(&record.month)
            && self.gender.matches(&record.gender)
    }
}

// ---------------------------------------------------------------------------
// Filter options presented to the user
// ---------------------------------------------------------------------------

/// Sorted distinct values observed for each dimension. Empty cells are not offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub months: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let distinct = |get: fn(&Record) -> &str| -> Vec<String> {
            dataset
                .records
                .iter()
                .map(get)
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        FilterOptions {
            states: distinct(|r| r.state.as_str()),
            months: distinct(|r| r.month.as_str()),
            genders: distinct(|r| r.gender.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the records that pass all active selections, in their original order.
///
/// The input dataset is left untouched. Returns [`PipelineError::EmptyResult`]
/// when no record survives.
pub fn apply_filters(dataset: &Dataset, selections: &Selections) -> Result<Dataset, PipelineError> {
    let records: Vec<Record> = dataset
        .records
        .iter()
        .filter(|r| selections.matches(r))
        .cloned()
        .collect();

    log::debug!("Filter kept {} of {} records", records.len(), dataset.len());
    if records.is_empty() {
        return Err(PipelineError::EmptyResult);
    }
    Ok(Dataset::new(dataset.columns.clone(), records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, month: &str, gender: &str, births: f64) -> Record {
        Record {
            state: state.into(),
            month: month.into(),
            month_code: String::new(),
            year_code: "2025".into(),
            gender: gender.into(),
            births,
            cells: vec![state.into(), month.into(), gender.into(), births.to_string()],
        }
    }

    fn sample() -> Dataset {
        Dataset::new(
            vec!["state_of_residence".into(), "month".into(), "sex_of_infant".into(), "births".into()],
            vec![
                record("CA", "January", "F", 10.0),
                record("TX", "January", "M", 4.0),
                record("NY", "February", "F", 6.0),
                record("CA", "February", "M", 3.0),
                record("TX", "March", "F", 2.0),
            ],
        )
    }

    fn only(values: &[&str]) -> Selection {
        Selection::from_choices(values.iter().copied())
    }

    #[test]
    fn all_on_every_dimension_is_identity() {
        let ds = sample();
        let out = apply_filters(&ds, &Selections::default()).unwrap();
        assert_eq!(out, ds);
    }

    #[test]
    fn state_subset_keeps_only_those_states_in_order() {
        let ds = sample();
        let sel = Selections {
            state: only(&["CA", "TX"]),
            ..Default::default()
        };
        let out = apply_filters(&ds, &sel).unwrap();
        let got: Vec<(&str, &str)> = out
            .records
            .iter()
            .map(|r| (r.state.as_str(), r.gender.as_str()))
            .collect();
        assert_eq!(got, vec![("CA", "F"), ("TX", "M"), ("CA", "M"), ("TX", "F")]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let ds = sample();
        let sel = Selections {
            state: only(&["CA", "TX"]),
            gender: only(&["F"]),
            ..Default::default()
        };
        let out = apply_filters(&ds, &sel).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out
            .records
            .iter()
            .all(|r| (r.state == "CA" || r.state == "TX") && r.gender == "F"));
    }

    #[test]
    fn all_choice_overrides_concrete_values() {
        assert_eq!(Selection::from_choices(["CA", ALL, "TX"]), Selection::All);
        let ds = sample();
        let sel = Selections {
            state: Selection::from_choices(["CA", ALL]),
            ..Default::default()
        };
        assert_eq!(apply_filters(&ds, &sel).unwrap().len(), ds.len());
    }

    #[test]
    fn absent_value_is_empty_result() {
        let ds = sample();
        let sel = Selections {
            state: only(&["ZZ"]),
            ..Default::default()
        };
        assert!(matches!(apply_filters(&ds, &sel), Err(PipelineError::EmptyResult)));
    }

    #[test]
    fn nothing_chosen_matches_nothing() {
        let sel = Selections {
            month: Selection::from_choices(Vec::<String>::new()),
            ..Default::default()
        };
        assert!(matches!(apply_filters(&sample(), &sel), Err(PipelineError::EmptyResult)));
    }

    #[test]
    fn filtering_is_deterministic_and_leaves_input_untouched() {
        let ds = sample();
        let before = ds.clone();
        let sel = Selections {
            month: only(&["January", "March"]),
            ..Default::default()
        };
        let a = apply_filters(&ds, &sel).unwrap();
        let b = apply_filters(&ds, &sel).unwrap();
        assert_eq!(a, b);
        assert_eq!(ds, before);
    }

    #[test]
    fn options_are_sorted_distinct_and_skip_blanks() {
        let mut ds = sample();
        ds.records.push(record("", "January", "", 1.0));
        let opts = FilterOptions::from_dataset(&ds);
        assert_eq!(opts.states, vec!["CA", "NY", "TX"]);
        assert_eq!(opts.months, vec!["February", "January", "March"]);
        assert_eq!(opts.genders, vec!["F", "M"]);
    }
}
