use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::sprint_progress;
use crate::errors::{AppError, AppResult};
use crate::store::{DomainStore, JsonFileStorage};
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::progress_bar;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { on } = cmd {
        let today = resolve_on(on)?;

        let backend = JsonFileStorage::open(&cfg.data_file)?;
        let store = DomainStore::open(backend)?;

        match store.current_sprint(today) {
            Some(sprint) => {
                header(format!("Current sprint: {}", sprint.name));
                println!("Goal:     {}", sprint.goal);
                println!("Window:   {} → {}", sprint.start_date, sprint.end_date);
                println!(
                    "Progress: {}",
                    progress_bar(sprint_progress(sprint, today), 20)
                );

                // Today's log, scoped to the current sprint (first match wins)
                let todays = store
                    .daily_logs()
                    .iter()
                    .find(|l| l.date == today && l.sprint_id == sprint.id);

                match todays {
                    Some(log) => {
                        println!("\nToday's log ({}):", log.date);
                        for task in &log.tasks_completed {
                            println!("  ✔ {}", task);
                        }
                        if log.blockers.is_empty() {
                            println!("  No blockers today!");
                        } else {
                            for blocker in &log.blockers {
                                println!("  ✋ {}", blocker);
                            }
                        }
                    }
                    None => println!("\nNo log entry for today yet."),
                }
            }
            None => {
                println!("No active sprint on {}.", today);
                println!("Create one with `devsprint sprint add` or pick a template.");
            }
        }
    }
    Ok(())
}

pub(crate) fn resolve_on(on: &Option<String>) -> AppResult<chrono::NaiveDate> {
    match on {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}
