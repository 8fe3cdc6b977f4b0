//! Read-only view of the tracker for the presentation layer.
//!
//! Rebuilt from the saved document after every command.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day::{promise_hint, promise_progress, status_label, streak_grid, DayLabel, GridCell};
use crate::state::{Body, Chain, Growth, Mind, Notes, PersistedState, Promise, QuickStatus, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromiseSummary {
    pub items: Vec<Promise>,
    pub done: usize,
    pub total: usize,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneySummary {
    pub month: String,
    pub today_total: f64,
    pub month_total: f64,
    /// Current month, newest first.
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub status: DayLabel,
    pub chain: Chain,
    pub grid: Vec<GridCell>,
    pub promises: PromiseSummary,
    pub money: MoneySummary,
    pub body: Body,
    pub calories_left: i64,
    pub mind: Mind,
    pub growth: Growth,
    pub notes: Notes,
    pub quick: QuickStatus,
}

impl Dashboard {
    pub fn build(state: &PersistedState, today: NaiveDate, grid_days: u32) -> Self {
        let (done, total) = promise_progress(&state.promises);

        let mut transactions: Vec<Transaction> = state.money.in_month(today).cloned().collect();
        transactions.reverse();

        Self {
            today,
            status: status_label(&state.history, today),
            chain: state.chain,
            grid: streak_grid(&state.history, today, grid_days),
            promises: PromiseSummary {
                items: state.promises.clone(),
                done,
                total,
                hint: promise_hint(done, total),
            },
            money: MoneySummary {
                month: crate::state::month_key(today),
                today_total: state.money.total_on(today),
                month_total: state.money.total_in_month(today),
                transactions,
            },
            body: state.body.clone(),
            calories_left: state.body.calories_left(),
            mind: state.mind.clone(),
            growth: state.growth.clone(),
            notes: state.notes.clone(),
            quick: state.quick,
        }
    }

    /// One character per grid day: `#` kept, `x` broken, `.` pending,
    /// today wrapped in brackets.
    pub fn grid_line(&self) -> String {
        self.grid
            .iter()
            .map(|cell| {
                let c = match cell.label {
                    DayLabel::Kept => '#',
                    DayLabel::Broken => 'x',
                    DayLabel::Pending => '.',
                };
                if cell.is_today {
                    format!("[{c}]")
                } else {
                    c.to_string()
                }
            })
            .collect()
    }
}

/// Round to two decimals and drop trailing zeros: `12.5`, `3`, `0.33`.
pub fn format_amount(n: f64) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    let s = format!("{rounded:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DayRecord, DayStatus};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn tx(d: &str, amount: f64, category: &str) -> Transaction {
        Transaction {
            date: date(d),
            amount,
            category: category.into(),
            note: String::new(),
        }
    }

    #[test]
    fn formats_amounts_like_a_ledger() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(1.0 / 3.0), "0.33");
        assert_eq!(format_amount(2.675_1), "2.68");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(100.0), "100");
    }

    #[test]
    fn dashboard_reflects_state() {
        let today = date("2024-07-15");
        let mut state = PersistedState::default();
        state.chain = Chain { current: 3, longest: 9 };
        state.history.insert(
            today,
            DayRecord {
                status: DayStatus::Kept,
                closed_at: "2024-07-15T20:00:00Z".parse().unwrap(),
            },
        );
        state.promises = vec![
            Promise {
                id: "a".into(),
                text: "Read".into(),
                tag: "Growth".into(),
                done: true,
            },
            Promise {
                id: "b".into(),
                text: "Run".into(),
                tag: "Health".into(),
                done: false,
            },
        ];
        state.money.tx = vec![
            tx("2024-06-30", 50.0, "rent"),
            tx("2024-07-01", 5.0, "coffee"),
            tx("2024-07-15", 7.5, "lunch"),
        ];
        state.body.consumed = 600;

        let dash = Dashboard::build(&state, today, 7);
        assert_eq!(dash.status, DayLabel::Kept);
        assert_eq!(dash.chain.longest, 9);
        assert_eq!(dash.grid.len(), 7);
        assert_eq!(dash.promises.hint, "1/2 promises completed.");
        assert_eq!(dash.money.month, "2024-07");
        assert_eq!(dash.money.today_total, 7.5);
        assert_eq!(dash.money.month_total, 12.5);
        assert_eq!(dash.money.transactions[0].category, "lunch");
        assert_eq!(dash.money.transactions.len(), 2);
        assert_eq!(dash.calories_left, 1200);
        assert_eq!(dash.grid_line(), "......[#]");
    }

    #[test]
    fn pending_day_without_history() {
        let dash = Dashboard::build(&PersistedState::default(), date("2024-07-15"), 3);
        assert_eq!(dash.status, DayLabel::Pending);
        assert_eq!(dash.grid_line(), "..[.]");
        assert_eq!(dash.promises.hint, "Add 1–3 promises. Keep all → chain continues.");
    }
}
