use super::model::{Dataset, RawTable, Record};
use crate::error::PipelineError;

/// Logical fields every normalized dataset must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "state_of_residence",
    "month",
    "month_code",
    "year_code",
    "sex_of_infant",
    "births",
];

/// Result of normalizing a raw table.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub dataset: Dataset,
    /// Rows discarded because `births` did not parse as a finite number.
    pub dropped_rows: usize,
}

/// Trim, lowercase and replace spaces with underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Parse a `births` cell. Empty, non-numeric and non-finite text is missing.
pub fn parse_births(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Column position of each required field, in [`REQUIRED_FIELDS`] order.
struct FieldIndex {
    state: usize,
    month: usize,
    month_code: usize,
    year_code: usize,
    gender: usize,
    births: usize,
}

impl FieldIndex {
    fn resolve(columns: &[String]) -> Result<Self, PipelineError> {
        let positions: Vec<Option<usize>> = REQUIRED_FIELDS
            .iter()
            .map(|field| columns.iter().position(|c| c == field))
            .collect();

        match positions[..] {
            [Some(state), Some(month), Some(month_code), Some(year_code), Some(gender), Some(births)] => {
                Ok(FieldIndex {
                    state,
                    month,
                    month_code,
                    year_code,
                    gender,
                    births,
                })
            }
            _ => Err(PipelineError::Schema {
                missing: REQUIRED_FIELDS
                    .iter()
                    .zip(&positions)
                    .filter(|(_, pos)| pos.is_none())
                    .map(|(field, _)| field.to_string())
                    .collect(),
                observed: columns.to_vec(),
            }),
        }
    }
}

/// Canonicalize headers, check the required fields and coerce `births`.
///
/// Rows whose `births` value does not parse are dropped, not imputed. The
/// number dropped is returned in [`Normalized::dropped_rows`]. Dropping every
/// row still yields a well-formed, empty [`Dataset`].
pub fn normalize(raw: RawTable) -> Result<Normalized, PipelineError> {
    let columns: Vec<String> = raw
        .headers
        .iter()
        .map(|h| normalize_column_name(h))
        .collect();
    let idx = FieldIndex::resolve(&columns)?;

    let total = raw.rows.len();
    let mut records = Vec::with_capacity(total);
    for mut cells in raw.rows {
        let Some(births) = cells.get(idx.births).and_then(|c| parse_births(c)) else {
            continue;
        };
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        let (state, month, month_code, year_code, gender) = (
            cell(idx.state),
            cell(idx.month),
            cell(idx.month_code),
            cell(idx.year_code),
            cell(idx.gender),
        );
        if let Some(slot) = cells.get_mut(idx.births) {
            *slot = births.to_string();
        }
        records.push(Record {
            state,
            month,
            month_code,
            year_code,
            gender,
            births,
            cells,
        });
    }

    let dropped_rows = total - records.len();
    if dropped_rows > 0 {
        log::warn!("Dropped {dropped_rows} of {total} rows with an unparsable 'births' value");
    }
    log::debug!("Normalized columns: {columns:?}");

    Ok(Normalized {
        dataset: Dataset::new(columns, records),
        dropped_rows,
    })
}
