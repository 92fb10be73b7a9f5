use crate::cli::parser::{Commands, SprintCmd};
use crate::config::Config;
use crate::core::analytics::sprint_progress;
use crate::core::templates;
use crate::errors::{AppError, AppResult};
use crate::models::sprint::NewSprint;
use crate::store::{DomainStore, JsonFileStorage};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sprint { action } = cmd {
        match action {
            SprintCmd::Add {
                name,
                goal,
                start,
                end,
                template,
            } => add(cfg, name, goal, start, end, template)?,
            SprintCmd::List => list(cfg)?,
            SprintCmd::Templates => list_templates(),
        }
    }
    Ok(())
}

fn add(
    cfg: &Config,
    name: &Option<String>,
    goal: &Option<String>,
    start: &Option<String>,
    end: &Option<String>,
    template: &Option<String>,
) -> AppResult<()> {
    let data = if let Some(id) = template {
        let tpl = templates::find(id).ok_or_else(|| AppError::TemplateNotFound(id.clone()))?;
        tpl.instantiate(date::today())
    } else {
        validate_fields(name, goal, start, end)?
    };

    let backend = JsonFileStorage::open(&cfg.data_file)?;
    let mut store = DomainStore::open(backend)?;
    let sprint = store.add_sprint(data)?;

    success(format!(
        "Sprint '{}' created (id {}, {} → {})",
        sprint.name, sprint.id, sprint.start_date, sprint.end_date
    ));
    Ok(())
}

/// Input validation happens here, at the submission boundary; the store
/// itself stays permissive and never sees a rejected payload.
fn validate_fields(
    name: &Option<String>,
    goal: &Option<String>,
    start: &Option<String>,
    end: &Option<String>,
) -> AppResult<NewSprint> {
    let name = name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("sprint name must not be empty".to_string()))?;

    let start = start
        .as_deref()
        .ok_or_else(|| AppError::Validation("--start is required".to_string()))?;
    let end = end
        .as_deref()
        .ok_or_else(|| AppError::Validation("--end is required".to_string()))?;

    let start_date =
        date::parse_date(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
    let end_date = date::parse_date(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;

    if start_date > end_date {
        return Err(AppError::Validation(format!(
            "start date {start_date} is after end date {end_date}"
        )));
    }

    Ok(NewSprint {
        name: name.to_string(),
        goal: goal.clone().unwrap_or_default(),
        start_date,
        end_date,
    })
}

fn list(cfg: &Config) -> AppResult<()> {
    let backend = JsonFileStorage::open(&cfg.data_file)?;
    let store = DomainStore::open(backend)?;

    if store.sprints().is_empty() {
        println!("No sprints yet. Create one with `devsprint sprint add`.");
        return Ok(());
    }

    let today = date::today();
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("NAME", 32),
        Column::new("START", 10),
        Column::new("END", 10),
        Column::new("PROGRESS", 8),
    ]);

    for sprint in store.sprints() {
        table.add_row(vec![
            sprint.id.clone(),
            sprint.name.clone(),
            sprint.start_date.to_string(),
            sprint.end_date.to_string(),
            format!("{}%", sprint_progress(sprint, today)),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

fn list_templates() {
    println!("Available sprint templates:\n");
    for tpl in templates::TEMPLATES {
        println!(
            "  {:<22} {} days  [{}]",
            tpl.id,
            tpl.duration_days,
            tpl.tags.join(", ")
        );
        println!("      {}", tpl.description);
    }
    println!("\nUse `devsprint sprint add --template <ID>` to start one today.");
}
