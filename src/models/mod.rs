pub mod daily_log;
pub mod preferences;
pub mod sprint;
pub mod widget;
