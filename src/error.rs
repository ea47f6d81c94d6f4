use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// PipelineError – every way a render run can stop
// ---------------------------------------------------------------------------

/// Terminal outcomes of a single normalize → filter → aggregate run.
///
/// None of these are retried; the user has to move the file, fix the source
/// or pick different filters and trigger a new run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The dataset file does not exist.
    #[error("Dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The source could not be read or parsed as a table.
    #[error("Error loading dataset {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required logical fields are absent after header normalization.
    #[error("Missing required logical fields: {missing:?}")]
    Schema {
        missing: Vec<String>,
        observed: Vec<String>,
    },

    /// The active filters removed every record.
    #[error("No data available for selected filters.")]
    EmptyResult,
}

impl PipelineError {
    /// `EmptyResult` is a valid outcome of the user's choice, not a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, PipelineError::EmptyResult)
    }
}
