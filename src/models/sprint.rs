use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named, goal-bearing time-boxed work period.
///
/// Serialized with camelCase keys and ISO `YYYY-MM-DD` dates so the
/// persisted layout matches the original `sprints` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub goal: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Sprint payload before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewSprint {
    pub name: String,
    pub goal: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Sprint {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
