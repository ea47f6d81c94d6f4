use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use natality_dashboard::config::DashboardConfig;
use natality_dashboard::data::filter::{ALL, FilterOptions, Selection, Selections};
use natality_dashboard::data::model::Dataset;
use natality_dashboard::data::schema::Normalized;
use natality_dashboard::pipeline::{RenderOutput, load_and_normalize, render_dataset};
use natality_dashboard::PipelineError;

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Filter dimensions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    State,
    Month,
    Gender,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::State, Dimension::Month, Dimension::Gender];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::State => "Select State(s)",
            Dimension::Month => "Select Month(s)",
            Dimension::Gender => "Select Gender(s)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Path of the currently loaded file.
    pub data_path: Option<PathBuf>,

    /// Normalized dataset (None until a file loads successfully).
    pub dataset: Option<Dataset>,

    /// Rows dropped for an unparsable `births` value on the last load.
    pub dropped_rows: usize,

    /// Values offered per dimension.
    pub options: FilterOptions,

    /// Raw multiselect choices per dimension, "All" included.
    choices: [Vec<String>; 3],

    /// Result of the last run; load and schema failures land here too.
    pub outcome: Option<Result<RenderOutput, PipelineError>>,

    /// Gender → colour, stable across filter changes.
    pub color_map: Option<ColorMap>,

    /// Message from a UI action (e.g. export) shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            data_path: None,
            dataset: None,
            dropped_rows: 0,
            options: FilterOptions::default(),
            choices: Self::default_choices(),
            outcome: None,
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// State with the configured dataset already loaded.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let mut state = Self::default();
        state.load_path(&config.data_path);
        state
    }

    fn default_choices() -> [Vec<String>; 3] {
        [vec![ALL.to_string()], vec![ALL.to_string()], vec![ALL.to_string()]]
    }

    /// Load, normalize and render a dataset file.
    pub fn load_path(&mut self, path: &Path) {
        self.data_path = Some(path.to_path_buf());
        self.status_message = None;
        match load_and_normalize(path) {
            Ok(normalized) => self.set_dataset(normalized),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.dataset = None;
                self.options = FilterOptions::default();
                self.color_map = None;
                self.dropped_rows = 0;
                self.outcome = Some(Err(e));
            }
        }
    }

    /// Ingest a newly normalized dataset, reset filters and render.
    pub fn set_dataset(&mut self, normalized: Normalized) {
        let Normalized {
            dataset,
            dropped_rows,
        } = normalized;
        log::info!(
            "Dataset ready: {} records, {} dropped",
            dataset.len(),
            dropped_rows
        );
        self.options = FilterOptions::from_dataset(&dataset);
        self.color_map = Some(ColorMap::new(&self.options.genders));
        self.choices = Self::default_choices();
        self.dropped_rows = dropped_rows;
        self.dataset = Some(dataset);
        self.rerender();
    }

    /// Values offered for a dimension.
    pub fn options_for(&self, dim: Dimension) -> &[String] {
        match dim {
            Dimension::State => &self.options.states,
            Dimension::Month => &self.options.months,
            Dimension::Gender => &self.options.genders,
        }
    }

    pub fn choices(&self, dim: Dimension) -> &[String] {
        &self.choices[dim.index()]
    }

    pub fn is_chosen(&self, dim: Dimension, value: &str) -> bool {
        self.choices[dim.index()].iter().any(|c| c == value)
    }

    /// Add or remove one multiselect choice, then re-run the pipeline.
    pub fn toggle_choice(&mut self, dim: Dimension, value: &str) {
        let choices = &mut self.choices[dim.index()];
        if let Some(pos) = choices.iter().position(|c| c == value) {
            choices.remove(pos);
        } else {
            choices.push(value.to_string());
        }
        self.rerender();
    }

    /// Current choices as pipeline selections.
    pub fn selections(&self) -> Selections {
        let sel = |dim: Dimension| Selection::from_choices(self.choices(dim).iter().cloned());
        Selections {
            state: sel(Dimension::State),
            month: sel(Dimension::Month),
            gender: sel(Dimension::Gender),
        }
    }

    /// Re-run filter → aggregate → chart against the loaded dataset.
    pub fn rerender(&mut self) {
        if let Some(ds) = &self.dataset {
            let outcome = render_dataset(ds, &self.selections());
            if let Err(e) = &outcome {
                log::warn!("{e}");
            }
            self.outcome = Some(outcome);
        }
    }

    pub fn output(&self) -> Option<&RenderOutput> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    /// Write the current chart specification as JSON.
    pub fn export_chart(&self, path: &Path) -> Result<()> {
        let output = self
            .output()
            .context("No chart to export for the current filters")?;
        let json = output
            .chart
            .to_json_pretty()
            .context("serializing chart specification")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported chart specification to {}", path.display());
        Ok(())
    }
}
