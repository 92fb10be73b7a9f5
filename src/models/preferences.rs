use super::widget::DashboardWidget;
use serde::{Deserialize, Serialize};

/// Singleton user preferences record, overwritten wholesale on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub dashboard_widgets: Vec<DashboardWidget>,
    pub notifications_enabled: bool,
    pub auto_sync_github: bool,
    pub theme: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dashboard_widgets: vec![
                DashboardWidget::ActiveSprint,
                DashboardWidget::TasksCompleted,
                DashboardWidget::Blockers,
                DashboardWidget::DailyStreak,
                DashboardWidget::GithubActivity,
                DashboardWidget::ProductivityScore,
                DashboardWidget::TimeTracking,
            ],
            notifications_enabled: true,
            auto_sync_github: true,
            theme: "system".to_string(),
        }
    }
}
