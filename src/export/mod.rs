//! Export module for pocket-budget
//!
//! - JSON: the full state as a versioned document, and the matching import
//! - CSV: transactions and accounts for spreadsheets

pub mod csv;
pub mod json;

pub use csv::{export_accounts_csv, export_transactions_csv};
pub use json::{
    export_json, export_json_file, import_json, parse_import, ExportDocument,
    ImportOutcome, ImportSummary, Rejection, EXPORT_SCHEMA_VERSION,
};
