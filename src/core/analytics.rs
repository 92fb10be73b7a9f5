//! Pure, stateless computations over the sprint and daily-log collections.
//!
//! Every function takes an explicit `on`/`today` date instead of reading the
//! clock, so callers (and tests) control what "now" means.

use chrono::NaiveDate;

use crate::models::daily_log::DailyLog;
use crate::models::sprint::Sprint;
use crate::utils::date::trailing_days;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMetric {
    Tasks,
    Blockers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub total_tasks: usize,
    pub total_blockers: usize,
    pub average_tasks_per_day: f64,
}

/// Completion percentage of a sprint as of `on`, clamped to 0..=100.
///
/// A sprint with no span (end not after start) counts as already complete,
/// so the interpolation below never divides by zero.
pub fn sprint_progress(sprint: &Sprint, on: NaiveDate) -> u32 {
    let total = (sprint.end_date - sprint.start_date).num_days();
    if total <= 0 {
        return 100;
    }
    if on <= sprint.start_date {
        return 0;
    }
    if on >= sprint.end_date {
        return 100;
    }

    let elapsed = (on - sprint.start_date).num_days();
    (100.0 * elapsed as f64 / total as f64).round() as u32
}

/// The single log whose date exactly matches `date`, first-inserted wins.
pub fn log_for_date(logs: &[DailyLog], date: NaiveDate) -> Option<&DailyLog> {
    logs.iter().find(|l| l.date == date)
}

/// Per-day counts over the last `days` calendar days ending at `today`.
///
/// Always returns exactly `days` entries in ascending date order; days with
/// no matching log report zero. Lookup is exact date equality, and when two
/// logs share a date the first-inserted one is counted.
pub fn trailing_window(
    logs: &[DailyLog],
    today: NaiveDate,
    days: u32,
    metric: WindowMetric,
) -> Vec<DayCount> {
    trailing_days(today, days)
        .into_iter()
        .map(|date| {
            let count = log_for_date(logs, date)
                .map(|log| match metric {
                    WindowMetric::Tasks => log.tasks_completed.len(),
                    WindowMetric::Blockers => log.blockers.len(),
                })
                .unwrap_or(0);
            DayCount { date, count }
        })
        .collect()
}

/// Sums across all logs. The average is 0 for an empty collection.
pub fn aggregate_totals(logs: &[DailyLog]) -> Totals {
    let total_tasks: usize = logs.iter().map(|l| l.tasks_completed.len()).sum();
    let total_blockers: usize = logs.iter().map(|l| l.blockers.len()).sum();
    let average_tasks_per_day = if logs.is_empty() {
        0.0
    } else {
        total_tasks as f64 / logs.len() as f64
    };

    Totals {
        total_tasks,
        total_blockers,
        average_tasks_per_day,
    }
}

/// Sprints still running or yet to finish as of `on`, soonest deadline
/// first, truncated to `limit`. Ties keep insertion order (stable sort).
pub fn upcoming_deadlines<'a>(sprints: &'a [Sprint], on: NaiveDate, limit: usize) -> Vec<&'a Sprint> {
    let mut upcoming: Vec<&Sprint> = sprints.iter().filter(|s| s.end_date >= on).collect();
    upcoming.sort_by_key(|s| s.end_date);
    upcoming.truncate(limit);
    upcoming
}

/// Most recent logs first, truncated to `limit`. Feeds the daily-streak
/// count (days with logs over the last week).
pub fn recent_logs(logs: &[DailyLog], limit: usize) -> Vec<&DailyLog> {
    let mut recent: Vec<&DailyLog> = logs.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

/// All logs referencing `sprint_id`, ascending by date. Used by the export
/// and the per-sprint log listing.
pub fn logs_for_sprint<'a>(logs: &'a [DailyLog], sprint_id: &str) -> Vec<&'a DailyLog> {
    let mut matching: Vec<&DailyLog> = logs.iter().filter(|l| l.sprint_id == sprint_id).collect();
    matching.sort_by_key(|l| l.date);
    matching
}
