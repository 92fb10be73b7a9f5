use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed set of dashboard widget identifiers.
///
/// The persisted form uses the kebab-case names the original layout stored
/// (`"active-sprint"`, `"tasks-completed"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardWidget {
    ActiveSprint,
    TasksCompleted,
    Blockers,
    DailyStreak,
    GithubActivity,
    ProductivityScore,
    TimeTracking,
    UpcomingDeadlines,
    RecentLogs,
}

impl DashboardWidget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardWidget::ActiveSprint => "active-sprint",
            DashboardWidget::TasksCompleted => "tasks-completed",
            DashboardWidget::Blockers => "blockers",
            DashboardWidget::DailyStreak => "daily-streak",
            DashboardWidget::GithubActivity => "github-activity",
            DashboardWidget::ProductivityScore => "productivity-score",
            DashboardWidget::TimeTracking => "time-tracking",
            DashboardWidget::UpcomingDeadlines => "upcoming-deadlines",
            DashboardWidget::RecentLogs => "recent-logs",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "active-sprint" => Some(DashboardWidget::ActiveSprint),
            "tasks-completed" => Some(DashboardWidget::TasksCompleted),
            "blockers" => Some(DashboardWidget::Blockers),
            "daily-streak" => Some(DashboardWidget::DailyStreak),
            "github-activity" => Some(DashboardWidget::GithubActivity),
            "productivity-score" => Some(DashboardWidget::ProductivityScore),
            "time-tracking" => Some(DashboardWidget::TimeTracking),
            "upcoming-deadlines" => Some(DashboardWidget::UpcomingDeadlines),
            "recent-logs" => Some(DashboardWidget::RecentLogs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for widget in [
            DashboardWidget::ActiveSprint,
            DashboardWidget::GithubActivity,
            DashboardWidget::UpcomingDeadlines,
            DashboardWidget::RecentLogs,
        ] {
            assert_eq!(DashboardWidget::from_code(widget.as_str()), Some(widget));
        }
        assert_eq!(DashboardWidget::from_code("crystal-ball"), None);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&DashboardWidget::DailyStreak).unwrap();
        assert_eq!(json, "\"daily-streak\"");
        let back: DashboardWidget = serde_json::from_str("\"productivity-score\"").unwrap();
        assert_eq!(back, DashboardWidget::ProductivityScore);
    }
}
