use crate::cli::parser::{Commands, LogCmd};
use crate::config::Config;
use crate::core::analytics::logs_for_sprint;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::{DailyLog, NewDailyLog};
use crate::store::{DomainStore, JsonFileStorage, StorageBackend};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::preview;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { action } = cmd {
        let backend = JsonFileStorage::open(&cfg.data_file)?;
        let mut store = DomainStore::open(backend)?;

        match action {
            LogCmd::Add {
                sprint,
                date: log_date,
                tasks,
                blockers,
                reflections,
            } => add(&mut store, sprint, log_date, tasks, blockers, reflections)?,
            LogCmd::List { sprint } => list(&store, sprint),
            LogCmd::View { id } => view(&store, id)?,
        }
    }
    Ok(())
}

fn add<B: StorageBackend>(
    store: &mut DomainStore<B>,
    sprint: &Option<String>,
    log_date: &Option<String>,
    tasks: &[String],
    blockers: &[String],
    reflections: &str,
) -> AppResult<()> {
    let d = match log_date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    // Default to the current sprint; an explicit id is taken as-is even if
    // it matches no sprint (weak reference, tolerated downstream).
    let sprint_id = match sprint {
        Some(id) => id.clone(),
        None => store
            .current_sprint(d)
            .map(|s| s.id.clone())
            .ok_or_else(|| {
                AppError::Validation(
                    "no current sprint; pass --sprint <ID> explicitly".to_string(),
                )
            })?,
    };

    let tasks: Vec<String> = tasks.iter().map(|t| t.trim().to_string()).collect();
    if tasks.iter().any(|t| t.is_empty()) {
        return Err(AppError::Validation("tasks must not be empty".to_string()));
    }
    if reflections.trim().is_empty() {
        return Err(AppError::Validation(
            "reflections must not be empty".to_string(),
        ));
    }

    let log = store.add_daily_log(NewDailyLog {
        sprint_id,
        date: d,
        tasks_completed: tasks,
        blockers: blockers.to_vec(),
        reflections: reflections.to_string(),
    })?;

    success(format!(
        "Daily log recorded for {} (id {}, {} tasks, {} blockers)",
        log.date,
        log.id,
        log.tasks_completed.len(),
        log.blockers.len()
    ));
    Ok(())
}

fn list<B: StorageBackend>(store: &DomainStore<B>, sprint: &Option<String>) {
    let logs: Vec<&DailyLog> = match sprint {
        Some(id) => logs_for_sprint(store.daily_logs(), id),
        None => store.daily_logs().iter().collect(),
    };

    if logs.is_empty() {
        println!("No daily logs yet. Record one with `devsprint log add`.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("DATE", 10),
        Column::new("SPRINT", 24),
        Column::new("TASKS", 5),
        Column::new("BLOCKERS", 8),
        Column::new("REFLECTIONS", 40),
    ]);

    for log in logs {
        let sprint_name = store
            .sprint_by_id(&log.sprint_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "(unknown sprint)".to_string());

        table.add_row(vec![
            log.id.clone(),
            log.date.to_string(),
            sprint_name,
            log.tasks_completed.len().to_string(),
            log.blockers.len().to_string(),
            preview(&log.reflections, 40),
        ]);
    }

    print!("{}", table.render());
}

fn view<B: StorageBackend>(store: &DomainStore<B>, id: &str) -> AppResult<()> {
    let log = store
        .log_by_id(id)
        .ok_or_else(|| AppError::LogNotFound(id.to_string()))?;

    let sprint_name = store
        .sprint_by_id(&log.sprint_id)
        .map(|s| s.name.as_str())
        .unwrap_or("(unknown sprint)");

    println!("=== Daily log {} — {} ===", log.id, log.date);
    println!("Sprint: {} ({})", sprint_name, log.sprint_id);

    println!("\nTasks completed:");
    if log.tasks_completed.is_empty() {
        println!("  (none)");
    }
    for task in &log.tasks_completed {
        println!("  - {}", task);
    }

    println!("\nBlockers:");
    if log.blockers.is_empty() {
        println!("  (none)");
    }
    for blocker in &log.blockers {
        println!("  - {}", blocker);
    }

    println!("\nReflections:\n{}", log.reflections);
    Ok(())
}
