//! Command dispatcher.
//!
//! A [`Tracker`] owns the state document, the store it came from and the
//! clock that decides "today". Every command either fails validation
//! (nothing changes, nothing is written), is declined at a confirmation
//! prompt (same), or is applied and immediately saved.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::command::{Command, Confirm};
use crate::dashboard::Dashboard;
use crate::day::{all_promises_kept, close_day};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::state::{month_key, DayStatus, PersistedState, Promise, Transaction, MAX_PROMISES};
use crate::storage::{Config, StateStore};

const DEFAULT_TAG: &str = "general";
const DEFAULT_CATEGORY: &str = "other";

/// What happened to a dispatched command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(Event),
    /// The user answered no to `prompt`; nothing changed.
    Declined { prompt: String },
}

impl Outcome {
    pub fn event(&self) -> Option<&Event> {
        match self {
            Outcome::Applied(event) => Some(event),
            Outcome::Declined { .. } => None,
        }
    }
}

pub struct Tracker<S: StateStore, C: Clock = SystemClock> {
    state: PersistedState,
    store: S,
    clock: C,
    config: Config,
}

impl<S: StateStore> Tracker<S, SystemClock> {
    /// Load the document from `store` using the system clock.
    pub fn open(store: S, config: Config) -> Self {
        Self::with_clock(store, SystemClock, config)
    }
}

impl<S: StateStore, C: Clock> Tracker<S, C> {
    pub fn with_clock(store: S, clock: C, config: Config) -> Self {
        let state = store.load_or(PersistedState::with_calorie_target(config.body.default_target));
        Self {
            state,
            store,
            clock,
            config,
        }
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Today's date according to the configured calendar.
    pub fn today(&self) -> NaiveDate {
        self.config.calendar.timezone.date_of(self.clock.now())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(&self.state, self.today(), self.config.streak.grid_days)
    }

    /// Clears stale done flags when a new day has started and the
    /// `promises.reset_on_new_day` option is on. Otherwise promises and
    /// their flags carry over untouched.
    ///
    /// The reset only touches the in-memory document. It reaches the store
    /// together with the next applied command, so a declined or rejected
    /// command never writes.
    pub fn roll_over(&mut self) -> Option<Event> {
        if !self.config.promises.reset_on_new_day {
            return None;
        }
        let today = self.today();
        let from = match self.state.promises_day {
            Some(day) if day < today => day,
            _ => return None,
        };

        for promise in &mut self.state.promises {
            promise.done = false;
        }
        self.state.promises_day = Some(today);

        tracing::info!(%from, to = %today, "promise checkmarks reset for new day");
        Some(Event::PromisesRolledOver {
            from,
            to: today,
            at: self.now(),
        })
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the command is not allowed in the
    /// current state, or a storage error when saving fails. In both cases
    /// nothing is written and the command leaves the in-memory document
    /// as it was.
    pub fn dispatch(&mut self, command: Command, confirm: &mut dyn Confirm) -> Result<Outcome> {
        self.roll_over();

        let today = self.today();
        let now = self.now();

        if let Some(prompt) = self.prompt_for(&command, today) {
            if !confirm.confirm(&prompt) {
                tracing::debug!(?command, "declined");
                return Ok(Outcome::Declined { prompt });
            }
        }

        let mut next = self.state.clone();
        let event = match self.apply(&mut next, command, today, now, confirm)? {
            Some(event) => event,
            None => {
                return Ok(Outcome::Declined {
                    prompt: DAILY_CLOSE_BROKEN_PROMPT.to_string(),
                })
            }
        };
        self.commit(next)?;
        Ok(Outcome::Applied(event))
    }

    /// Promise list capacity: the configured value, never above
    /// [`MAX_PROMISES`] and never below one.
    pub fn promise_limit(&self) -> usize {
        self.config.promises.max.clamp(1, MAX_PROMISES)
    }

    fn prompt_for(&self, command: &Command, today: NaiveDate) -> Option<String> {
        match command {
            Command::CloseDay {
                status: DayStatus::Broken,
            } => Some("This will RESET your chain to 0. Confirm?".to_string()),
            Command::ClearPromises => Some("Reset today's promises?".to_string()),
            Command::ClearMonthExpenses => Some(format!(
                "Clear ALL transactions for {}?",
                month_key(today)
            )),
            _ => None,
        }
    }

    /// Mutates `next`; `Ok(None)` means a mid-command prompt was declined.
    fn apply(
        &self,
        next: &mut PersistedState,
        command: Command,
        today: NaiveDate,
        now: DateTime<Utc>,
        confirm: &mut dyn Confirm,
    ) -> Result<Option<Event>> {
        if command.edits_promises() {
            next.promises_day = Some(today);
        }

        let event = match command {
            Command::AddPromise { text, tag } => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ValidationError::EmptyText {
                        field: "promise".into(),
                    }
                    .into());
                }
                let max = self.promise_limit();
                if next.promises.len() >= max {
                    return Err(ValidationError::PromiseLimit { max }.into());
                }
                let tag = tag.trim();
                let promise = Promise {
                    id: Uuid::new_v4().simple().to_string(),
                    text: text.to_string(),
                    tag: if tag.is_empty() { DEFAULT_TAG } else { tag }.to_string(),
                    done: false,
                };
                next.promises.push(promise.clone());
                Event::PromiseAdded { promise, at: now }
            }
            Command::TogglePromise { id, done } => {
                let promise = next
                    .promise_mut(&id)
                    .ok_or_else(|| ValidationError::UnknownPromise(id.clone()))?;
                promise.done = done;
                Event::PromiseToggled { id, done, at: now }
            }
            Command::ClearPromises => {
                let removed = next.promises.len();
                next.promises.clear();
                Event::PromisesCleared { removed, at: now }
            }
            Command::CloseDay { status } => closed_event(next, status, today, now)?,
            Command::DailyClose => {
                if next.promises.is_empty() {
                    return Err(ValidationError::NoPromises.into());
                }
                if all_promises_kept(&next.promises) {
                    closed_event(next, DayStatus::Kept, today, now)?
                } else if confirm.confirm(DAILY_CLOSE_BROKEN_PROMPT) {
                    closed_event(next, DayStatus::Broken, today, now)?
                } else {
                    return Ok(None);
                }
            }
            Command::SaveNote { field, text } => {
                next.notes.set(field, text);
                Event::NoteSaved { field, at: now }
            }
            Command::SetQuickStatus {
                workout,
                meditation,
                learning,
            } => {
                next.quick.workout = workout;
                next.quick.meditation = meditation;
                next.quick.learning = learning;
                Event::QuickStatusSaved {
                    quick: next.quick,
                    at: now,
                }
            }
            Command::AddExpense {
                amount,
                category,
                note,
            } => {
                if !amount.is_finite() || amount <= 0.0 {
                    return Err(ValidationError::InvalidAmount(amount).into());
                }
                let category = category.trim();
                let transaction = Transaction {
                    date: today,
                    amount,
                    category: if category.is_empty() { DEFAULT_CATEGORY } else { category }
                        .to_string(),
                    note: note.trim().to_string(),
                };
                next.money.tx.push(transaction.clone());
                Event::ExpenseAdded {
                    transaction,
                    at: now,
                }
            }
            Command::ClearMonthExpenses => {
                let removed = next.money.clear_month(today);
                Event::ExpensesCleared {
                    month: month_key(today),
                    removed,
                    at: now,
                }
            }
            Command::SetCalories { target, consumed } => {
                next.body.target = target;
                next.body.consumed = consumed;
                Event::CaloriesSaved {
                    target,
                    consumed,
                    left: next.body.calories_left(),
                    at: now,
                }
            }
            Command::SaveWorkoutNotes { text } => {
                next.body.workout_notes = text;
                Event::WorkoutNotesSaved { at: now }
            }
            Command::SetMeditation { mins, done, note } => {
                next.mind.mins = mins;
                next.mind.done = done;
                next.mind.note = note;
                Event::MeditationSaved { mins, done, at: now }
            }
            Command::SetLearning { mins, topic, note } => {
                next.growth.mins = mins;
                next.growth.topic = topic.clone();
                next.growth.note = note;
                Event::LearningSaved {
                    mins,
                    topic,
                    at: now,
                }
            }
        };
        Ok(Some(event))
    }

    /// Save `next`, then make it the live document.
    fn commit(&mut self, next: PersistedState) -> Result<()> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }
}

const DAILY_CLOSE_BROKEN_PROMPT: &str =
    "Not all promises are complete. Mark as BROKE and reset chain?";

fn closed_event(
    state: &mut PersistedState,
    status: DayStatus,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Event> {
    let closed = close_day(state, status, today, now)?;
    Ok(Event::DayClosed {
        date: closed.date,
        status: closed.status,
        chain: closed.chain_after,
        replaced: closed.replaced,
        at: now,
    })
}
