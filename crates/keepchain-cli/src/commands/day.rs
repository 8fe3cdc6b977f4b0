//! Day closing commands for CLI.

use clap::Subcommand;
use keepchain_core::{Command, DayStatus};

use crate::common::{CliResult, Session};

#[derive(Subcommand)]
pub enum DayAction {
    /// Close today as kept (every promise must be done)
    Kept,
    /// Close today as broken and reset the chain (asks first)
    Broken,
    /// Kept if every promise is done, otherwise offer to close as broken
    Close,
}

pub fn run(action: DayAction, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;
    let command = match action {
        DayAction::Kept => Command::CloseDay {
            status: DayStatus::Kept,
        },
        DayAction::Broken => Command::CloseDay {
            status: DayStatus::Broken,
        },
        DayAction::Close => Command::DailyClose,
    };
    session.dispatch(&mut tracker, command)
}
