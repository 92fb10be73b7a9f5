use crate::cli::parser::{Commands, MetricArg};
use crate::config::Config;
use crate::core::analytics::{
    WindowMetric, aggregate_totals, recent_logs, trailing_window, upcoming_deadlines,
};
use crate::errors::AppResult;
use crate::store::{DomainStore, JsonFileStorage};
use crate::ui::messages::header;

use super::status::resolve_on;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { days, metric, on } = cmd {
        let today = resolve_on(on)?;
        let days = days.unwrap_or(cfg.trailing_window_days);
        let metric = match metric {
            MetricArg::Tasks => WindowMetric::Tasks,
            MetricArg::Blockers => WindowMetric::Blockers,
        };

        let backend = JsonFileStorage::open(&cfg.data_file)?;
        let store = DomainStore::open(backend)?;
        let logs = store.daily_logs();

        // --- Trailing window ---
        let label = match metric {
            WindowMetric::Tasks => "tasks",
            WindowMetric::Blockers => "blockers",
        };
        header(format!("Daily {label} over the last {days} days"));
        let window = trailing_window(logs, today, days, metric);
        let max = window.iter().map(|d| d.count).max().unwrap_or(0).max(1);
        for day in &window {
            let bar = "▇".repeat(day.count * 30 / max);
            println!("{}  {:>3}  {}", day.date, day.count, bar);
        }

        // --- Aggregate totals ---
        let totals = aggregate_totals(logs);
        header("Totals");
        println!("Total tasks completed:     {}", totals.total_tasks);
        println!("Total blockers:            {}", totals.total_blockers);
        println!(
            "Average tasks per day:     {:.1}",
            totals.average_tasks_per_day
        );
        println!(
            "Daily streak (last week):  {} days with logs",
            recent_logs(logs, 7).len()
        );

        // --- Upcoming deadlines ---
        header("Upcoming deadlines");
        let deadlines = upcoming_deadlines(store.sprints(), today, cfg.deadline_limit);
        if deadlines.is_empty() {
            println!("No sprints ending on or after {}.", today);
        } else {
            for sprint in deadlines {
                println!("{}  {}", sprint.end_date, sprint.name);
            }
        }
    }
    Ok(())
}
