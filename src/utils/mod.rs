pub mod date;
pub mod formatting;
pub mod table;
