use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Chain, DayStatus, NoteField, Promise, QuickStatus, Transaction};

/// Every applied command produces an Event.
/// The presentation layer prints it and redraws from the saved state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PromiseAdded {
        promise: Promise,
        at: DateTime<Utc>,
    },
    PromiseToggled {
        id: String,
        done: bool,
        at: DateTime<Utc>,
    },
    PromisesCleared {
        removed: usize,
        at: DateTime<Utc>,
    },
    /// Done flags were cleared because a new day started.
    PromisesRolledOver {
        from: NaiveDate,
        to: NaiveDate,
        at: DateTime<Utc>,
    },
    DayClosed {
        date: NaiveDate,
        status: DayStatus,
        chain: Chain,
        /// Status the date already had before this close.
        #[serde(skip_serializing_if = "Option::is_none")]
        replaced: Option<DayStatus>,
        at: DateTime<Utc>,
    },
    NoteSaved {
        field: NoteField,
        at: DateTime<Utc>,
    },
    QuickStatusSaved {
        quick: QuickStatus,
        at: DateTime<Utc>,
    },
    ExpenseAdded {
        transaction: Transaction,
        at: DateTime<Utc>,
    },
    ExpensesCleared {
        month: String,
        removed: usize,
        at: DateTime<Utc>,
    },
    CaloriesSaved {
        target: u32,
        consumed: u32,
        left: i64,
        at: DateTime<Utc>,
    },
    WorkoutNotesSaved {
        at: DateTime<Utc>,
    },
    MeditationSaved {
        mins: u32,
        done: bool,
        at: DateTime<Utc>,
    },
    LearningSaved {
        mins: u32,
        topic: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short human-readable line for terminal output.
    pub fn summary(&self) -> String {
        match self {
            Event::PromiseAdded { promise, .. } => {
                format!("Promise added: {} [{}] ({})", promise.text, promise.tag, promise.id)
            }
            Event::PromiseToggled { id, done, .. } => {
                format!("Promise {id} marked {}", if *done { "done" } else { "not done" })
            }
            Event::PromisesCleared { removed, .. } => format!("Cleared {removed} promise(s)"),
            Event::PromisesRolledOver { from, to, .. } => {
                format!("New day {to}: promise checkmarks from {from} cleared")
            }
            Event::DayClosed { date, status, chain, .. } => format!(
                "{date} closed as {status}. Chain: {} (longest {})",
                chain.current, chain.longest
            ),
            Event::NoteSaved { field, .. } => format!("Saved {}", field.as_str()),
            Event::QuickStatusSaved { quick, .. } => format!(
                "Quick status saved: workout={} meditation={} learning={}",
                quick.workout, quick.meditation, quick.learning
            ),
            Event::ExpenseAdded { transaction, .. } => format!(
                "Expense added: {} {} on {}",
                crate::dashboard::format_amount(transaction.amount),
                transaction.category,
                transaction.date
            ),
            Event::ExpensesCleared { month, removed, .. } => {
                format!("Cleared {removed} transaction(s) for {month}")
            }
            Event::CaloriesSaved { left, .. } => format!("Calories left today: {left}"),
            Event::WorkoutNotesSaved { .. } => "Workout notes saved".to_string(),
            Event::MeditationSaved { mins, done, .. } => format!(
                "Meditation saved: {mins} min, {}",
                if *done { "done" } else { "not done" }
            ),
            Event::LearningSaved { mins, topic, .. } => {
                format!("Learning saved: {mins} min on {topic}")
            }
        }
    }
}
