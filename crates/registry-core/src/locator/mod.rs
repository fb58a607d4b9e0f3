//! Turning fetched registry pages into raw records

pub mod report_table;

pub use report_table::locate_report_table;
