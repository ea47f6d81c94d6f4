use std::path::PathBuf;

/// File loaded on startup when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "Provisional_Natality_2025_CDC.csv";

/// Environment variable overriding the dataset path.
pub const DATA_PATH_ENV: &str = "NATALITY_DATA_PATH";

/// Startup configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl DashboardConfig {
    /// First CLI argument, then [`DATA_PATH_ENV`], then [`DEFAULT_DATA_FILE`].
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(DATA_PATH_ENV).ok(),
        )
    }

    fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        let data_path = arg
            .into_iter()
            .chain(env)
            .find(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_path }
    }
}
