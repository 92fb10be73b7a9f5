//! Markdown export: one heading per sprint, one dated subsection per log.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::analytics::logs_for_sprint;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::daily_log::DailyLog;
use crate::models::sprint::Sprint;
use crate::ui::messages::info;

/// Render the full document. Logs are grouped under the sprint they
/// reference, ascending by date; logs with a dangling sprint id are simply
/// not reachable from any heading, matching the original export.
pub(crate) fn render(sprints: &[Sprint], logs: &[DailyLog]) -> String {
    let mut out = String::from("# Sprint Logs Export\n\n");

    for sprint in sprints {
        out.push_str(&format!("## Sprint: {}\n", sprint.name));
        out.push_str(&format!("Goal: {}\n", sprint.goal));
        out.push_str(&format!(
            "Duration: {} to {}\n\n",
            sprint.start_date, sprint.end_date
        ));

        for log in logs_for_sprint(logs, &sprint.id) {
            out.push_str(&format!("### {}\n\n", log.date));

            out.push_str("#### Tasks Completed\n");
            for task in &log.tasks_completed {
                out.push_str(&format!("- {}\n", task));
            }

            out.push_str("\n#### Blockers\n");
            if log.blockers.is_empty() {
                out.push_str("- No blockers reported\n");
            } else {
                for blocker in &log.blockers {
                    out.push_str(&format!("- {}\n", blocker));
                }
            }

            out.push_str(&format!("\n#### Reflections\n{}\n\n", log.reflections));
        }
    }

    out
}

pub(crate) fn export_markdown(
    sprints: &[Sprint],
    logs: &[DailyLog],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to Markdown: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all(render(sprints, logs).as_bytes())?;

    notify_export_success("Markdown", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_headings_tasks_and_blocker_fallback() {
        let sprints = vec![Sprint {
            id: "1".into(),
            name: "Auth Sprint".into(),
            goal: "Ship login".into(),
            start_date: ymd(2024, 1, 1),
            end_date: ymd(2024, 1, 14),
        }];
        let logs = vec![DailyLog {
            id: "2".into(),
            sprint_id: "1".into(),
            date: ymd(2024, 1, 3),
            tasks_completed: vec!["wired OAuth".into()],
            blockers: vec![],
            reflections: "good pace".into(),
        }];

        let md = render(&sprints, &logs);
        assert!(md.starts_with("# Sprint Logs Export\n"));
        assert!(md.contains("## Sprint: Auth Sprint\n"));
        assert!(md.contains("Goal: Ship login\n"));
        assert!(md.contains("Duration: 2024-01-01 to 2024-01-14\n"));
        assert!(md.contains("### 2024-01-03\n"));
        assert!(md.contains("- wired OAuth\n"));
        assert!(md.contains("- No blockers reported\n"));
        assert!(md.contains("#### Reflections\ngood pace\n"));
    }

    #[test]
    fn logs_render_in_date_order() {
        let sprints = vec![Sprint {
            id: "1".into(),
            name: "S".into(),
            goal: String::new(),
            start_date: ymd(2024, 1, 1),
            end_date: ymd(2024, 1, 14),
        }];
        let logs = vec![
            DailyLog {
                id: "2".into(),
                sprint_id: "1".into(),
                date: ymd(2024, 1, 5),
                tasks_completed: vec![],
                blockers: vec![],
                reflections: String::new(),
            },
            DailyLog {
                id: "3".into(),
                sprint_id: "1".into(),
                date: ymd(2024, 1, 2),
                tasks_completed: vec![],
                blockers: vec![],
                reflections: String::new(),
            },
        ];

        let md = render(&sprints, &logs);
        let first = md.find("### 2024-01-02").unwrap();
        let second = md.find("### 2024-01-05").unwrap();
        assert!(first < second);
    }
}
