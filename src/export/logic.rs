use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::markdown::export_markdown;
use crate::export::model::LogExport;
use crate::store::{DomainStore, StorageBackend};
use crate::ui::messages::warning;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the sprint/daily-log data.
    ///
    /// - `format`: "md" | "json" | "csv"
    /// - `file`: absolute path of the output file
    pub fn export<B: StorageBackend>(
        store: &DomainStore<B>,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if store.sprints().is_empty() && store.daily_logs().is_empty() {
            warning("No sprints or daily logs to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Md => export_markdown(store.sprints(), store.daily_logs(), path),
            ExportFormat::Json => export_json(&flat_rows(store), path),
            ExportFormat::Csv => export_csv(&flat_rows(store), path),
        }
    }
}

/// One flat row per log, ascending by date, sprint names resolved where the
/// reference is intact.
fn flat_rows<B: StorageBackend>(store: &DomainStore<B>) -> Vec<LogExport> {
    let mut logs: Vec<_> = store.daily_logs().iter().collect();
    logs.sort_by_key(|l| l.date);

    logs.into_iter()
        .map(|log| LogExport::from_log(log, store.sprint_by_id(&log.sprint_id)))
        .collect()
}
