//! Notes and quick status commands for CLI.

use clap::{Args, Subcommand};
use keepchain_core::{Command, NoteField};

use crate::common::{CliResult, Session};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Replace a note field
    Save {
        /// top3, quick-notes, weekly-plan, monthly-goals or dream-board
        field: NoteField,
        /// New text (use quotes for several words)
        text: String,
    },
    /// Print one note field, or all of them
    Show {
        field: Option<NoteField>,
    },
}

#[derive(Args)]
pub struct QuickArgs {
    #[arg(long)]
    workout: Option<bool>,
    #[arg(long)]
    meditation: Option<bool>,
    #[arg(long)]
    learning: Option<bool>,
}

pub fn run(action: NoteAction, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;

    match action {
        NoteAction::Save { field, text } => {
            session.dispatch(&mut tracker, Command::SaveNote { field, text })?;
        }
        NoteAction::Show { field } => {
            let notes = &tracker.state().notes;
            match field {
                Some(field) if session.json => {
                    println!("{}", serde_json::json!({ field.as_str(): notes.get(field) }));
                }
                Some(field) => println!("{}", notes.get(field)),
                None if session.json => println!("{}", serde_json::to_string_pretty(notes)?),
                None => {
                    for field in NoteField::ALL {
                        println!("## {}", field.as_str());
                        println!("{}", notes.get(field));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Flags left out keep their current value.
pub fn quick(args: QuickArgs, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;
    let current = tracker.state().quick;
    session.dispatch(
        &mut tracker,
        Command::SetQuickStatus {
            workout: args.workout.unwrap_or(current.workout),
            meditation: args.meditation.unwrap_or(current.meditation),
            learning: args.learning.unwrap_or(current.learning),
        },
    )
}
