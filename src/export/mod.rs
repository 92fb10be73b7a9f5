mod fs_utils;
mod json_csv;
pub mod logic;
mod markdown;
mod model;

pub use logic::ExportLogic;
pub use model::LogExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Md,
    Json,
    Csv,
}
