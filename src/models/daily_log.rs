use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day record of completed tasks, blockers, and reflections.
///
/// `sprint_id` is a weak reference: a log may point at a sprint that no
/// longer exists (or never did). Lookups through it are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: String,
    pub sprint_id: String,
    pub date: NaiveDate,
    pub tasks_completed: Vec<String>,
    pub blockers: Vec<String>,
    pub reflections: String,
}

/// Daily log payload before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewDailyLog {
    pub sprint_id: String,
    pub date: NaiveDate,
    pub tasks_completed: Vec<String>,
    pub blockers: Vec<String>,
    pub reflections: String,
}
