//! Ancillary logs: notes, quick checks, money, body, mind, growth.
//!
//! Flat records with no cross-entity invariants.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::DEFAULT_CALORIE_TARGET;

/// Freeform note fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notes {
    pub top3: String,
    pub quick_notes: String,
    pub weekly_plan: String,
    pub monthly_goals: String,
    pub dream_board: String,
}

/// Addresses one field of [`Notes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteField {
    Top3,
    QuickNotes,
    WeeklyPlan,
    MonthlyGoals,
    DreamBoard,
}

impl NoteField {
    pub const ALL: [NoteField; 5] = [
        NoteField::Top3,
        NoteField::QuickNotes,
        NoteField::WeeklyPlan,
        NoteField::MonthlyGoals,
        NoteField::DreamBoard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteField::Top3 => "top3",
            NoteField::QuickNotes => "quick-notes",
            NoteField::WeeklyPlan => "weekly-plan",
            NoteField::MonthlyGoals => "monthly-goals",
            NoteField::DreamBoard => "dream-board",
        }
    }
}

impl std::str::FromStr for NoteField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        NoteField::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized || f.as_str().replace('-', "") == normalized)
            .ok_or_else(|| format!("unknown note field: {s}"))
    }
}

impl Notes {
    pub fn get(&self, field: NoteField) -> &str {
        match field {
            NoteField::Top3 => &self.top3,
            NoteField::QuickNotes => &self.quick_notes,
            NoteField::WeeklyPlan => &self.weekly_plan,
            NoteField::MonthlyGoals => &self.monthly_goals,
            NoteField::DreamBoard => &self.dream_board,
        }
    }

    pub fn set(&mut self, field: NoteField, text: String) {
        let slot = match field {
            NoteField::Top3 => &mut self.top3,
            NoteField::QuickNotes => &mut self.quick_notes,
            NoteField::WeeklyPlan => &mut self.weekly_plan,
            NoteField::MonthlyGoals => &mut self.monthly_goals,
            NoteField::DreamBoard => &mut self.dream_board,
        };
        *slot = text;
    }
}

/// Quick daily check boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickStatus {
    pub workout: bool,
    pub meditation: bool,
    pub learning: bool,
}

/// One expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "iso")]
    pub date: NaiveDate,
    #[serde(rename = "amt", default)]
    pub amount: f64,
    #[serde(rename = "cat", default)]
    pub category: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Money {
    pub tx: Vec<Transaction>,
}

impl Money {
    /// Transactions in the month of `date`, oldest first.
    pub fn in_month(&self, date: NaiveDate) -> impl Iterator<Item = &Transaction> {
        let key = month_key(date);
        self.tx.iter().filter(move |t| month_key(t.date) == key)
    }

    pub fn total_on(&self, date: NaiveDate) -> f64 {
        self.tx.iter().filter(|t| t.date == date).map(|t| t.amount).sum()
    }

    pub fn total_in_month(&self, date: NaiveDate) -> f64 {
        self.in_month(date).map(|t| t.amount).sum()
    }

    /// Drops every transaction in the month of `date`; returns how many went.
    pub fn clear_month(&mut self, date: NaiveDate) -> usize {
        let key = month_key(date);
        let before = self.tx.len();
        self.tx.retain(|t| month_key(t.date) != key);
        before - self.tx.len()
    }
}

/// `YYYY-MM` for a date.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    #[serde(deserialize_with = "lenient_count")]
    pub target: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub consumed: u32,
    pub workout_notes: String,
}

impl Default for Body {
    fn default() -> Self {
        Self::with_target(DEFAULT_CALORIE_TARGET)
    }
}

impl Body {
    pub fn with_target(target: u32) -> Self {
        Self {
            target,
            consumed: 0,
            workout_notes: String::new(),
        }
    }

    /// Negative once the target is exceeded.
    pub fn calories_left(&self) -> i64 {
        i64::from(self.target) - i64::from(self.consumed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mind {
    #[serde(deserialize_with = "lenient_count")]
    pub mins: u32,
    pub done: bool,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Growth {
    #[serde(deserialize_with = "lenient_count")]
    pub mins: u32,
    pub topic: String,
    pub note: String,
}

/// Counts written by older documents may be fractional, negative, quoted
/// or null. Round to the nearest whole number and saturate into `u32`.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(f64),
        Text(String),
    }

    let value = match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(n)) => n,
        Some(Loose::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };
    // `as` saturates: NaN and negatives become 0.
    Ok(value.round() as u32)
}
