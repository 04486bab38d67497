//! JSON export and import
//!
//! The export document carries a schema version so older files can still be
//! read. Import checks the version, then deserializes and validates each
//! entity on its own: a bad entity is rejected and reported while the rest
//! go through.

use std::collections::HashSet;
use std::hash::Hash;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Account, Category, Transaction};
use crate::storage::{write_json_atomic, BudgetState, Store};

/// Current export schema version. Documents without a version are read as 1.
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

const COLLECTIONS: [&str; 3] = ["categories", "accounts", "transactions"];

/// Full export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    /// Version of pocket-budget that wrote the file
    pub app_version: String,
    pub categories: Vec<Category>,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}

impl ExportDocument {
    pub fn from_state(state: &BudgetState) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: state.categories.clone(),
            accounts: state.accounts.clone(),
            transactions: state.transactions.clone(),
        }
    }
}

/// Write the whole state as an export document
pub fn export_json<W: Write>(state: &BudgetState, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let document = ExportDocument::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &document)
    } else {
        serde_json::to_writer(writer, &document)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))
}

/// Write the export document to `path`, replacing it atomically
pub fn export_json_file(state: &BudgetState, path: &Path) -> BudgetResult<()> {
    write_json_atomic(path, &ExportDocument::from_state(state))
        .map_err(|e| BudgetError::Export(e.to_string()))
}

/// An entity that did not make it into the import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// `categories`, `accounts` or `transactions`
    pub collection: &'static str,
    /// Position in the source array
    pub index: usize,
    pub reason: String,
}

/// Parsed import, ready to commit
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub state: BudgetState,
    pub rejected: Vec<Rejection>,
}

/// Parse an export document.
///
/// Fails as a whole when the text is not a JSON object, carries none of the
/// three collections, has a schema version newer than
/// [`EXPORT_SCHEMA_VERSION`], or has a collection that is not an array.
/// Everything else is decided per entity.
pub fn parse_import(json: &str) -> BudgetResult<ImportOutcome> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| BudgetError::Import(format!("not a valid JSON document: {e}")))?;
    let Value::Object(mut root) = root else {
        return Err(BudgetError::Import("expected a JSON object at the top level".into()));
    };

    let version = schema_version(&root)?;
    debug!(version, "reading export document");

    if !COLLECTIONS.iter().any(|key| root.contains_key(*key)) {
        return Err(BudgetError::Import(
            "not a budget export: no categories, accounts or transactions".into(),
        ));
    }

    let mut rejected = Vec::new();

    let categories = accept(
        "categories",
        take_array(&mut root, "categories")?,
        |c: &Category| c.validate().map_err(|e| e.to_string()),
        |c| c.id,
        &mut rejected,
    );

    let mut raw_accounts = take_array(&mut root, "accounts")?;
    raw_accounts.iter_mut().for_each(fill_starting_balance);
    let accounts = accept(
        "accounts",
        raw_accounts,
        |a: &Account| a.validate().map_err(|e| e.to_string()),
        |a| a.id,
        &mut rejected,
    );

    let transactions = accept(
        "transactions",
        take_array(&mut root, "transactions")?,
        |t: &Transaction| t.validate().map_err(|e| e.to_string()),
        |t| t.id,
        &mut rejected,
    );

    for rejection in &rejected {
        warn!(
            collection = rejection.collection,
            index = rejection.index,
            reason = %rejection.reason,
            "import entity rejected"
        );
    }

    Ok(ImportOutcome {
        state: BudgetState {
            categories,
            accounts,
            transactions,
        },
        rejected,
    })
}

/// Counts reported after an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub accounts: usize,
    pub transactions: usize,
    pub rejected: Vec<Rejection>,
}

/// Parse `json` and replace the store's three collections in one commit.
///
/// On a parse failure the store is left untouched.
pub fn import_json(store: &mut Store, json: &str) -> BudgetResult<ImportSummary> {
    let ImportOutcome { state, rejected } = parse_import(json)?;
    let summary = ImportSummary {
        categories: state.categories.len(),
        accounts: state.accounts.len(),
        transactions: state.transactions.len(),
        rejected,
    };

    store.commit(state);
    info!(
        categories = summary.categories,
        accounts = summary.accounts,
        transactions = summary.transactions,
        rejected = summary.rejected.len(),
        "import committed"
    );
    Ok(summary)
}

fn schema_version(root: &Map<String, Value>) -> BudgetResult<u32> {
    let version = match root.get("schema_version") {
        None => return Ok(1),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| BudgetError::Import(format!("unreadable schema_version: {value}")))?,
    };

    if version == 0 || version > EXPORT_SCHEMA_VERSION {
        return Err(BudgetError::Import(format!(
            "schema version {version} is not supported (this build reads up to {EXPORT_SCHEMA_VERSION})"
        )));
    }
    Ok(version)
}

fn take_array(root: &mut Map<String, Value>, key: &'static str) -> BudgetResult<Vec<Value>> {
    match root.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(BudgetError::Import(format!("`{key}` must be an array"))),
    }
}

/// Version 1 files may carry only `balance`; treat it as the baseline too
fn fill_starting_balance(value: &mut Value) {
    if let Value::Object(account) = value {
        if !account.contains_key("starting_balance") {
            if let Some(balance) = account.get("balance").cloned() {
                account.insert("starting_balance".into(), balance);
            }
        }
    }
}

/// Deserialize and validate each item, keeping the first occurrence of an ID
fn accept<T, K>(
    collection: &'static str,
    items: Vec<Value>,
    validate: impl Fn(&T) -> Result<(), String>,
    key: impl Fn(&T) -> K,
    rejected: &mut Vec<Rejection>,
) -> Vec<T>
where
    T: DeserializeOwned,
    K: Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut accepted = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let outcome = serde_json::from_value::<T>(item)
            .map_err(|e| e.to_string())
            .and_then(|entity| validate(&entity).map(|()| entity))
            .and_then(|entity| {
                if seen.insert(key(&entity)) {
                    Ok(entity)
                } else {
                    Err("duplicate id".to_string())
                }
            });

        match outcome {
            Ok(entity) => accepted.push(entity),
            Err(reason) => rejected.push(Rejection {
                collection,
                index,
                reason,
            }),
        }
    }
    accepted
}
