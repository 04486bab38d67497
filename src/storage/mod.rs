//! Storage layer for pocket-budget
//!
//! [`Store`] owns the whole [`BudgetState`]. Readers call [`Store::get`];
//! writers build a new state and hand it to [`Store::commit`], which swaps it
//! in and persists it through a [`StateBackend`]. A failed write is logged and
//! otherwise ignored: the in-memory state is still updated.

pub mod backend;
pub mod file_io;
pub mod state;

pub use backend::{JsonFileBackend, MemoryBackend, StateBackend};
pub use file_io::{read_json, write_json_atomic};
pub use state::{BudgetState, UNKNOWN};

use tracing::{debug, warn};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;

/// Owner of the application state
pub struct Store {
    state: BudgetState,
    backend: Box<dyn StateBackend>,
}

impl Store {
    /// Load the state from `backend` and keep the backend for later commits
    pub fn open(backend: impl StateBackend + 'static) -> BudgetResult<Self> {
        let state = backend.load()?;
        Ok(Self {
            state,
            backend: Box::new(backend),
        })
    }

    /// Open the JSON-file store under the configured data directory
    pub fn open_at(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Self::open(JsonFileBackend::new(paths))
    }

    /// An empty store that persists nowhere but memory
    pub fn in_memory() -> Self {
        Self {
            state: BudgetState::default(),
            backend: Box::new(MemoryBackend::new()),
        }
    }

    /// Current state
    pub fn get(&self) -> &BudgetState {
        &self.state
    }

    /// Replace the current state and persist it (best effort)
    pub fn commit(&mut self, new_state: BudgetState) {
        self.state = new_state;
        match self.backend.save(&self.state) {
            Ok(()) => debug!("state committed"),
            Err(e) => warn!(error = %e, "failed to persist state; keeping in-memory changes"),
        }
    }

    /// Apply `change` to a copy of the current state and commit the result
    pub fn update<R>(&mut self, change: impl FnOnce(&mut BudgetState) -> R) -> R {
        let mut next = self.state.clone();
        let result = change(&mut next);
        self.commit(next);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Money};
    use tempfile::TempDir;

    #[test]
    fn test_commit_persists() {
        let backend = MemoryBackend::new();
        let mut store = Store::open(backend.clone()).unwrap();

        let mut next = store.get().clone();
        next.accounts.push(Account::new("Checking"));
        store.commit(next);

        assert_eq!(store.get().accounts.len(), 1);
        assert_eq!(backend.writes(), 1);
        assert_eq!(backend.saved(), *store.get());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let backend = MemoryBackend::new();
        backend.fail_writes(true);
        let mut store = Store::open(backend.clone()).unwrap();

        store.update(|state| state.accounts.push(Account::new("Cash")));

        assert_eq!(store.get().accounts.len(), 1);
        assert_eq!(backend.writes(), 0);
        assert!(backend.saved().accounts.is_empty());
    }

    #[test]
    fn test_open_loads_existing_state() {
        let mut seeded = BudgetState::default();
        seeded
            .accounts
            .push(Account::with_starting_balance("Savings", Money::from_units(5)));
        let store = Store::open(MemoryBackend::with_state(seeded.clone())).unwrap();
        assert_eq!(*store.get(), seeded);
    }

    #[test]
    fn test_open_at_reopens_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut store = Store::open_at(&paths).unwrap();
        store.update(|state| state.accounts.push(Account::new("Checking")));

        let reopened = Store::open_at(&paths).unwrap();
        assert_eq!(reopened.get(), store.get());
    }
}
