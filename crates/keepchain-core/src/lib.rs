//! # keepchain Core Library
//!
//! This library provides the core logic for keepchain, a personal daily
//! discipline tracker. The user keeps up to three daily promises, closes
//! each day as kept or broken, and the library maintains the streak chain
//! plus a handful of ancillary logs (money, body, mind, growth, notes).
//! The standalone `keepchain` CLI is a thin presentation layer over it.
//!
//! ## Architecture
//!
//! - **Day-Status Engine**: pure streak transition logic and the derived
//!   history views (status labels, streak grid)
//! - **State Store**: one JSON document in a SQLite kv slot, loaded
//!   fail-soft and saved after every mutation
//! - **Tracker**: typed command dispatcher with confirmation prompts for
//!   destructive commands
//!
//! ## Key Components
//!
//! - [`Tracker`]: applies [`Command`]s and persists the result
//! - [`PersistedState`]: the whole durable document
//! - [`StateStore`]: persistence trait ([`SqliteStore`], [`MemoryStore`])
//! - [`Dashboard`]: read-only view rebuilt after each command
//! - [`Config`]: TOML configuration

pub mod clock;
pub mod command;
pub mod dashboard;
pub mod day;
pub mod error;
pub mod events;
pub mod state;
pub mod storage;
pub mod tracker;

pub use clock::{CalendarZone, Clock, FixedClock, SystemClock};
pub use command::{AssumeNo, AssumeYes, Command, Confirm};
pub use dashboard::{format_amount, Dashboard};
pub use day::{close_day, DayClosed, DayLabel, GridCell, MAX_GRID_DAYS};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use state::{Chain, DayRecord, DayStatus, NoteField, PersistedState, Promise, MAX_PROMISES};
pub use storage::{Config, Database, MemoryStore, SqliteStore, StateStore};
pub use tracker::{Outcome, Tracker};
