pub mod analytics;
pub mod backup;
pub mod templates;
