use serde::Serialize;

use crate::models::daily_log::DailyLog;
use crate::models::sprint::Sprint;

/// Flat per-log row for the JSON and CSV exports. Task and blocker lists
/// are joined with `"; "` so each log stays a single row.
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub id: String,
    pub sprint_id: String,
    pub sprint_name: String,
    pub date: String,
    pub tasks_completed: String,
    pub blockers: String,
    pub reflections: String,
}

impl LogExport {
    /// `sprint` is the resolved reference, if any; dangling sprint ids
    /// render with an empty sprint name rather than failing.
    pub fn from_log(log: &DailyLog, sprint: Option<&Sprint>) -> Self {
        Self {
            id: log.id.clone(),
            sprint_id: log.sprint_id.clone(),
            sprint_name: sprint.map(|s| s.name.clone()).unwrap_or_default(),
            date: log.date.format("%Y-%m-%d").to_string(),
            tasks_completed: log.tasks_completed.join("; "),
            blockers: log.blockers.join("; "),
            reflections: log.reflections.clone(),
        }
    }
}
