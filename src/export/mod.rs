//! Export module
//!
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: the full state plus a summary, readable by `import`
//! - YAML: the same content in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, EXPENSE_CSV_HEADER};
pub use json::{export_full_json, ExportSummary, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
