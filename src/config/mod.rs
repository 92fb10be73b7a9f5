use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Application configuration, stored as YAML in the config directory.
///
/// This is tool configuration (where the data file lives, display knobs),
/// not the user's dashboard preferences; those live inside the data store
/// itself and are managed by `store::prefs`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_window_days")]
    pub trailing_window_days: u32,
    #[serde(default = "default_deadline_limit")]
    pub deadline_limit: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_window_days() -> u32 {
    7
}
fn default_deadline_limit() -> usize {
    3
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file().to_string_lossy().to_string(),
            trailing_window_days: default_window_days(),
            deadline_limit: default_deadline_limit(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("devsprint")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".devsprint")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("devsprint.conf")
    }

    /// Return the full path of the JSON data store
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("devsprint.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable config file is a hard error: it indicates a broken
    /// installation, not missing state.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and data files.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data file path: user provided or default
        let data_path = if let Some(name) = custom_data {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_file()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped under --test so test runs never touch
        // the real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create an empty store if not present
        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, "{}")?;
        }

        println!("✅ Data file:   {:?}", data_path);

        Ok(())
    }
}
