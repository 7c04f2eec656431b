//! Whole-state JSON export and import

mod export;
mod import;

pub use export::{export_file_name, export_state};
pub use import::import_state;
