//! Built-in sprint template catalog.

use chrono::{Duration, NaiveDate};

use crate::models::sprint::NewSprint;

pub struct SprintTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration_days: i64,
    pub goal: &'static str,
    pub tags: &'static [&'static str],
}

pub const TEMPLATES: &[SprintTemplate] = &[
    SprintTemplate {
        id: "frontend-feature",
        name: "Frontend Feature Implementation",
        description: "A sprint focused on implementing a new frontend feature from design to deployment.",
        duration_days: 14,
        goal: "Implement and deploy new frontend feature including responsive design, animations, and unit tests.",
        tags: &["Frontend", "UI/UX", "React"],
    },
    SprintTemplate {
        id: "backend-api",
        name: "Backend API Development",
        description: "Build a new API endpoint with proper documentation and testing.",
        duration_days: 14,
        goal: "Design, implement, test, and document new REST API endpoints with authentication and rate limiting.",
        tags: &["Backend", "API", "Documentation"],
    },
    SprintTemplate {
        id: "analytics-dashboard",
        name: "Analytics Dashboard",
        description: "Create an analytics dashboard with charts and data visualization.",
        duration_days: 21,
        goal: "Build interactive dashboard with charts, filters, and exportable reports to visualize key metrics.",
        tags: &["Data", "Charts", "Dashboard"],
    },
    SprintTemplate {
        id: "design-system",
        name: "Design System Components",
        description: "Create reusable components for your design system.",
        duration_days: 21,
        goal: "Develop 5-10 new reusable UI components following accessibility guidelines with documentation.",
        tags: &["UI", "Components", "Design System"],
    },
];

pub fn find(id: &str) -> Option<&'static SprintTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

impl SprintTemplate {
    /// Materialize a sprint starting at `start` with this template's span.
    pub fn instantiate(&self, start: NaiveDate) -> NewSprint {
        NewSprint {
            name: self.name.to_string(),
            goal: self.goal.to_string(),
            start_date: start,
            end_date: start + Duration::days(self.duration_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn instantiate_spans_duration() {
        let tpl = find("frontend-feature").unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let sprint = tpl.instantiate(start);
        assert_eq!(sprint.start_date, start);
        assert_eq!(
            sprint.end_date,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert_eq!(sprint.name, "Frontend Feature Implementation");
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(find("nope").is_none());
    }
}
