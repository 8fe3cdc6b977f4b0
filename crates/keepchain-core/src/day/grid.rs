//! Derived, read-only views over the day history.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::state::{DayRecord, DayStatus};

/// Number of days shown in the streak grid by default.
pub const DEFAULT_GRID_DAYS: u32 = 60;

/// Longest window the grid will render.
pub const MAX_GRID_DAYS: u32 = 366;

/// Display classification of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayLabel {
    Kept,
    Broken,
    Pending,
}

impl DayLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayLabel::Kept => "kept",
            DayLabel::Broken => "broken",
            DayLabel::Pending => "pending",
        }
    }
}

impl From<DayStatus> for DayLabel {
    fn from(status: DayStatus) -> Self {
        match status {
            DayStatus::Kept => DayLabel::Kept,
            DayStatus::Broken => DayLabel::Broken,
        }
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One square of the streak grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub label: DayLabel,
    pub is_today: bool,
}

/// Status label for `date`: the recorded status, else pending.
pub fn status_label(history: &BTreeMap<NaiveDate, DayRecord>, date: NaiveDate) -> DayLabel {
    history
        .get(&date)
        .map(|r| DayLabel::from(r.status))
        .unwrap_or(DayLabel::Pending)
}

/// `days` consecutive dates ending with `today`, oldest first. Windows
/// longer than [`MAX_GRID_DAYS`] are cut to that length.
pub fn streak_grid(
    history: &BTreeMap<NaiveDate, DayRecord>,
    today: NaiveDate,
    days: u32,
) -> Vec<GridCell> {
    (0..i64::from(days.min(MAX_GRID_DAYS)))
        .rev()
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .map(|date| GridCell {
            date,
            label: status_label(history, date),
            is_today: date == today,
        })
        .collect()
}

/// One-line hint shown under the promise list.
pub fn promise_hint(done: usize, total: usize) -> String {
    if total == 0 {
        "Add 1–3 promises. Keep all → chain continues.".to_string()
    } else {
        format!("{done}/{total} promises completed.")
    }
}
