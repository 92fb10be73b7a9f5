use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{DomainStore, JsonFileStorage};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let backend = JsonFileStorage::open(&cfg.data_file)?;
        let store = DomainStore::open(backend)?;
        ExportLogic::export(&store, format, file, *force)?;
    }
    Ok(())
}
