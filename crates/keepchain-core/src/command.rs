//! Typed user intents.
//!
//! The presentation layer turns user input into a [`Command`]; the
//! [`Tracker`](crate::Tracker) pattern-matches it and applies it.

use serde::{Deserialize, Serialize};

use crate::state::{DayStatus, NoteField};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddPromise {
        text: String,
        tag: String,
    },
    TogglePromise {
        id: String,
        done: bool,
    },
    ClearPromises,
    /// Close today with an explicit status.
    CloseDay {
        status: DayStatus,
    },
    /// Close today as kept if every promise is done, otherwise offer to
    /// close it as broken.
    DailyClose,
    SaveNote {
        field: NoteField,
        text: String,
    },
    SetQuickStatus {
        workout: bool,
        meditation: bool,
        learning: bool,
    },
    AddExpense {
        amount: f64,
        category: String,
        note: String,
    },
    /// Drop every transaction of the current month.
    ClearMonthExpenses,
    SetCalories {
        target: u32,
        consumed: u32,
    },
    SaveWorkoutNotes {
        text: String,
    },
    SetMeditation {
        mins: u32,
        done: bool,
        note: String,
    },
    SetLearning {
        mins: u32,
        topic: String,
        note: String,
    },
}

impl Command {
    /// Whether the command always needs the user's consent before it runs.
    ///
    /// `DailyClose` only asks on its broken branch, so it is not listed.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Command::ClearPromises
                | Command::ClearMonthExpenses
                | Command::CloseDay {
                    status: DayStatus::Broken
                }
        )
    }

    /// Whether the command touches the promise list.
    pub fn edits_promises(&self) -> bool {
        matches!(
            self,
            Command::AddPromise { .. } | Command::TogglePromise { .. } | Command::ClearPromises
        )
    }
}

/// Answers confirmation prompts for destructive commands.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Says yes to everything.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Says no to everything.
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_use_tagged_json() {
        let cmd = Command::CloseDay {
            status: DayStatus::Kept,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "close_day");
        assert_eq!(json["status"], "kept");

        let parsed: Command =
            serde_json::from_str(r#"{"type":"save_note","field":"weeklyPlan","text":"x"}"#)
                .unwrap();
        assert_eq!(
            parsed,
            Command::SaveNote {
                field: NoteField::WeeklyPlan,
                text: "x".into()
            }
        );
    }

    #[test]
    fn destructive_commands() {
        assert!(Command::ClearPromises.is_destructive());
        assert!(Command::ClearMonthExpenses.is_destructive());
        assert!(Command::CloseDay {
            status: DayStatus::Broken
        }
        .is_destructive());
        assert!(!Command::CloseDay {
            status: DayStatus::Kept
        }
        .is_destructive());
        assert!(!Command::DailyClose.is_destructive());
    }

    #[test]
    fn closures_confirm() {
        let mut asked = Vec::new();
        let mut confirm = |prompt: &str| {
            asked.push(prompt.to_string());
            false
        };
        assert!(!confirm.confirm("sure?"));
        assert_eq!(asked, vec!["sure?".to_string()]);
        assert!(AssumeYes.confirm("x"));
        assert!(!AssumeNo.confirm("x"));
    }
}
