use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::JsonFileStorage;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the JSON data store (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load()?;
    let data_file = cli.data.clone().unwrap_or(cfg.data_file);

    println!("⚙️  Initializing DevSprint…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Data store  : {}", &data_file);

    // Open once so a pre-existing corrupted file is reported right away
    let _ = JsonFileStorage::open(&data_file)?;

    println!("🎉 DevSprint initialization completed!");
    Ok(())
}
