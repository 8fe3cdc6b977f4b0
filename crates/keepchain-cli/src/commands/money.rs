//! Expense ledger commands for CLI.

use clap::Subcommand;
use keepchain_core::{format_amount, Command};

use crate::common::{CliResult, Session};

#[derive(Subcommand)]
pub enum MoneyAction {
    /// Record an expense for today
    Add {
        /// Amount spent (must be positive)
        amount: f64,
        /// Category
        #[arg(long, default_value = "other")]
        cat: String,
        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },
    /// This month's transactions, newest first
    Show,
    /// Delete every transaction of the current month (asks first)
    Clear,
}

pub fn run(action: MoneyAction, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;

    match action {
        MoneyAction::Add { amount, cat, note } => {
            session.dispatch(
                &mut tracker,
                Command::AddExpense {
                    amount,
                    category: cat,
                    note,
                },
            )?;
        }
        MoneyAction::Show => {
            let money = tracker.dashboard().money;
            if session.json {
                println!("{}", serde_json::to_string_pretty(&money)?);
                return Ok(());
            }
            println!(
                "{}: today {} | month {}",
                money.month,
                format_amount(money.today_total),
                format_amount(money.month_total)
            );
            for t in &money.transactions {
                println!(
                    "{}  {:<12} {:<24} {:>10}",
                    t.date,
                    t.category,
                    t.note,
                    format_amount(t.amount)
                );
            }
        }
        MoneyAction::Clear => {
            session.dispatch(&mut tracker, Command::ClearMonthExpenses)?;
        }
    }
    Ok(())
}
