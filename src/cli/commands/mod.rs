pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod prefs;
pub mod sprint;
pub mod stats;
pub mod status;
