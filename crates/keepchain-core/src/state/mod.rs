//! The persisted state document.
//!
//! A single [`PersistedState`] holds everything the tracker knows: the
//! streak chain, the per-day history, today's promises and the ancillary
//! logs. It is serialized as one JSON document with camelCase keys.
//!
//! Every field carries a serde default so a document written by an older
//! build (or hand-edited with keys missing) still loads; missing values
//! simply read as zero, empty or `false`.

mod logs;

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use logs::{month_key, Body, Growth, Mind, Money, NoteField, Notes, QuickStatus, Transaction};

/// Calorie target used when nothing else is configured.
pub const DEFAULT_CALORIE_TARGET: u32 = 1800;

/// Hard cap on the promise list, whatever the configuration says.
pub const MAX_PROMISES: usize = 3;

/// Final status of a closed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[serde(alias = "good")]
    Kept,
    #[serde(alias = "bad")]
    Broken,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Kept => "kept",
            DayStatus::Broken => "broken",
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kept" | "good" => Ok(DayStatus::Kept),
            "broken" | "broke" | "bad" => Ok(DayStatus::Broken),
            other => Err(format!("unknown day status: {other} (expected kept or broken)")),
        }
    }
}

/// History entry for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub status: DayStatus,
    pub closed_at: DateTime<Utc>,
}

/// Streak counters. `longest >= current` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
    pub current: u32,
    pub longest: u32,
}

/// A daily commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promise {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub done: bool,
}

/// The entire durable state of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub chain: Chain,
    pub history: BTreeMap<NaiveDate, DayRecord>,
    pub promises: Vec<Promise>,
    /// Last date the promise list was edited or checked against a rollover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promises_day: Option<NaiveDate>,
    pub notes: Notes,
    pub quick: QuickStatus,
    pub money: Money,
    pub body: Body,
    pub mind: Mind,
    pub growth: Growth,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self::with_calorie_target(DEFAULT_CALORIE_TARGET)
    }
}

impl PersistedState {
    /// Fresh document with every counter at zero and the given calorie target.
    pub fn with_calorie_target(target: u32) -> Self {
        Self {
            chain: Chain::default(),
            history: BTreeMap::new(),
            promises: Vec::new(),
            promises_day: None,
            notes: Notes::default(),
            quick: QuickStatus::default(),
            money: Money::default(),
            body: Body::with_target(target),
            mind: Mind::default(),
            growth: Growth::default(),
        }
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<DayStatus> {
        self.history.get(&date).map(|r| r.status)
    }

    pub fn promise(&self, id: &str) -> Option<&Promise> {
        self.promises.iter().find(|p| p.id == id)
    }

    pub fn promise_mut(&mut self, id: &str) -> Option<&mut Promise> {
        self.promises.iter_mut().find(|p| p.id == id)
    }
}
