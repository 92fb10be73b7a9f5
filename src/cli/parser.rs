use crate::export::ExportFormat;
use crate::models::widget::DashboardWidget;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for DevSprint
/// CLI application to track sprints, daily logs, and productivity analytics
#[derive(Parser)]
#[command(
    name = "devsprint",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track agile sprints and daily logs, with derived productivity analytics",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom stores)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage sprints
    Sprint {
        #[command(subcommand)]
        action: SprintCmd,
    },

    /// Manage daily logs
    Log {
        #[command(subcommand)]
        action: LogCmd,
    },

    /// Show the current sprint, its progress, and today's log
    Status {
        #[arg(long = "on", help = "Evaluate as of this date (YYYY-MM-DD, default today)")]
        on: Option<String>,
    },

    /// Show trailing-window counts, totals, streak, and upcoming deadlines
    Stats {
        #[arg(long, help = "Window length in days (default from config)")]
        days: Option<u32>,

        #[arg(long, value_enum, default_value = "tasks")]
        metric: MetricArg,

        #[arg(long = "on", help = "Evaluate as of this date (YYYY-MM-DD, default today)")]
        on: Option<String>,
    },

    /// View or update dashboard preferences
    Prefs {
        #[arg(long = "print", help = "Print the current preferences")]
        print_prefs: bool,

        #[arg(
            long,
            value_enum,
            value_delimiter = ',',
            help = "Replace the dashboard widget layout (comma-separated)"
        )]
        widgets: Option<Vec<DashboardWidget>>,

        #[arg(long, help = "Set the theme tag (e.g. system, dark, light)")]
        theme: Option<String>,

        #[arg(long, value_enum, help = "Enable or disable notifications")]
        notifications: Option<Toggle>,

        #[arg(long, value_enum, help = "Enable or disable GitHub auto-sync")]
        autosync: Option<Toggle>,
    },

    /// Export sprint and daily-log data
    Export {
        #[arg(long, value_enum, default_value = "md")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum SprintCmd {
    /// Create a sprint, either from explicit fields or a template
    Add {
        /// Display name (required unless --template is given)
        name: Option<String>,

        #[arg(long, help = "Sprint goal description")]
        goal: Option<String>,

        #[arg(long, help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long, help = "End date (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(
            long,
            conflicts_with_all = ["name", "goal", "start", "end"],
            help = "Create from a built-in template id (see `sprint templates`)"
        )]
        template: Option<String>,
    },

    /// List all sprints
    List,

    /// List the built-in sprint templates
    Templates,
}

#[derive(Subcommand)]
pub enum LogCmd {
    /// Record a daily log entry
    Add {
        #[arg(long, help = "Sprint id (default: the current sprint)")]
        sprint: Option<String>,

        #[arg(long, help = "Log date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "task", help = "Completed task (repeatable)")]
        tasks: Vec<String>,

        #[arg(long = "blocker", help = "Blocker (repeatable)")]
        blockers: Vec<String>,

        #[arg(long, help = "Free-text reflections for the day")]
        reflections: String,
    },

    /// List daily logs
    List {
        #[arg(long, help = "Only logs for this sprint id")]
        sprint: Option<String>,
    },

    /// Show a single daily log in full
    View { id: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MetricArg {
    Tasks,
    Blockers,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn as_bool(self) -> bool {
        matches!(self, Toggle::On)
    }
}
