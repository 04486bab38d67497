//! Persistence backends behind [`Store::commit`](super::Store::commit)

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_json, write_json_atomic};
use super::state::BudgetState;

/// Where a [`BudgetState`] is loaded from and written back to
pub trait StateBackend {
    /// Load the last saved state
    fn load(&self) -> BudgetResult<BudgetState>;

    /// Replace the saved state with `state`
    fn save(&self, state: &BudgetState) -> BudgetResult<()>;
}

/// Three JSON files, one bare array per collection
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    categories: PathBuf,
    accounts: PathBuf,
    transactions: PathBuf,
}

impl JsonFileBackend {
    pub fn new(paths: &BudgetPaths) -> Self {
        Self {
            categories: paths.categories_file(),
            accounts: paths.accounts_file(),
            transactions: paths.transactions_file(),
        }
    }

    /// A collection that is missing or fails to parse loads as empty. A broken
    /// file is moved to `<name>.json.corrupt` so the next commit cannot
    /// overwrite it.
    fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
        match read_json::<Vec<T>, _>(path) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                let aside = corrupt_path(path);
                match fs::rename(path, &aside) {
                    Ok(()) => warn!(
                        path = %path.display(),
                        moved_to = %aside.display(),
                        error = %e,
                        "unreadable collection moved aside"
                    ),
                    Err(rename_err) => warn!(
                        path = %path.display(),
                        error = %e,
                        rename_error = %rename_err,
                        "ignoring unreadable collection"
                    ),
                }
                Vec::new()
            }
        }
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

impl StateBackend for JsonFileBackend {
    fn load(&self) -> BudgetResult<BudgetState> {
        let state = BudgetState {
            categories: Self::load_collection(&self.categories),
            accounts: Self::load_collection(&self.accounts),
            transactions: Self::load_collection(&self.transactions),
        };
        debug!(
            categories = state.categories.len(),
            accounts = state.accounts.len(),
            transactions = state.transactions.len(),
            "loaded state"
        );
        Ok(state)
    }

    fn save(&self, state: &BudgetState) -> BudgetResult<()> {
        // Attempt every file even if an earlier one fails
        let results = [
            write_json_atomic(&self.categories, state.categories.as_slice()),
            write_json_atomic(&self.accounts, state.accounts.as_slice()),
            write_json_atomic(&self.transactions, state.transactions.as_slice()),
        ];
        results.into_iter().collect()
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    saved: BudgetState,
    writes: usize,
    fail_writes: bool,
}

/// In-memory backend. Clones share the same saved snapshot, so a test can keep
/// a handle after giving one to a [`Store`](super::Store).
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that starts out holding `state`
    pub fn with_state(state: BudgetState) -> Self {
        let backend = Self::new();
        backend.inner.borrow_mut().saved = state;
        backend
    }

    /// Make every following save fail
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// The last successfully saved state
    pub fn saved(&self) -> BudgetState {
        self.inner.borrow().saved.clone()
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl StateBackend for MemoryBackend {
    fn load(&self) -> BudgetResult<BudgetState> {
        Ok(self.inner.borrow().saved.clone())
    }

    fn save(&self, state: &BudgetState) -> BudgetResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(BudgetError::Storage("memory backend is read-only".into()));
        }
        inner.saved = state.clone();
        inner.writes += 1;
        Ok(())
    }
}
