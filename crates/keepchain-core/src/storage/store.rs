//! Persistence slot for the tracker document.
//!
//! A store only knows how to read and write one raw JSON string. Loading
//! is fail-soft: a missing slot, an unreadable slot or a document that
//! does not parse all produce the default document instead of an error.

use std::cell::{Cell, RefCell};

use crate::error::Result;
use crate::state::PersistedState;

use super::Database;

/// Key of the document in the kv table.
pub const STATE_KEY: &str = "keepchain_state";

pub trait StateStore {
    /// Raw document, `None` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the raw document.
    fn write(&self, json: &str) -> Result<()>;

    /// Persisted state if present and readable, otherwise `defaults`.
    fn load_or(&self, defaults: PersistedState) -> PersistedState {
        let raw = match self.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return defaults,
            Err(e) => {
                tracing::warn!(error = %e, "state slot unreadable, starting from defaults");
                return defaults;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "stored state is malformed, starting from defaults");
                defaults
            }
        }
    }

    fn load(&self) -> PersistedState {
        self.load_or(PersistedState::default())
    }

    /// Write the full document.
    fn save(&self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.write(&json)?;
        tracing::trace!(bytes = json.len(), "state saved");
        Ok(())
    }
}

/// Document stored in the SQLite kv table.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the default database in the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Database::open()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl StateStore for SqliteStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.db.kv_get(STATE_KEY)?)
    }

    fn write(&self, json: &str) -> Result<()> {
        self.db.kv_set(STATE_KEY, json)?;
        Ok(())
    }
}

/// In-process store. Counts writes so callers can assert write-through.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a raw document.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
            writes: Cell::new(0),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl StateStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, json: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(json.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, json: &str) -> Result<()> {
        (**self).write(json)
    }
}
