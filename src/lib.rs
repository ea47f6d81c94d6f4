//! Filter → aggregate → present pipeline for provisional natality (birth record) data.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;

pub use data::filter::{Selection, Selections};
pub use error::PipelineError;
pub use pipeline::{RenderOutput, render, render_dataset};
