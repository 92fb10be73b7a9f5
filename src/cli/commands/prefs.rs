use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::JsonFileStorage;
use crate::store::prefs::{load_preferences, save_preferences};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Prefs {
        print_prefs,
        widgets,
        theme,
        notifications,
        autosync,
    } = cmd
    {
        let mut backend = JsonFileStorage::open(&cfg.data_file)?;
        let mut prefs = load_preferences(&backend)?;

        let mut changed = false;

        if let Some(widgets) = widgets {
            prefs.dashboard_widgets = widgets.clone();
            changed = true;
        }
        if let Some(theme) = theme {
            prefs.theme = theme.clone();
            changed = true;
        }
        if let Some(toggle) = notifications {
            prefs.notifications_enabled = toggle.as_bool();
            changed = true;
        }
        if let Some(toggle) = autosync {
            prefs.auto_sync_github = toggle.as_bool();
            changed = true;
        }

        if changed {
            save_preferences(&mut backend, &prefs)?;
            success("Preferences updated.");
        }

        if *print_prefs || !changed {
            println!("Dashboard widgets:");
            for widget in &prefs.dashboard_widgets {
                println!("  - {}", widget.as_str());
            }
            println!(
                "Notifications:    {}",
                if prefs.notifications_enabled { "on" } else { "off" }
            );
            println!(
                "GitHub auto-sync: {}",
                if prefs.auto_sync_github { "on" } else { "off" }
            );
            println!("Theme:            {}", prefs.theme);
        }
    }
    Ok(())
}
