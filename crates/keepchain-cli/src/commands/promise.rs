//! Promise management commands for CLI.

use clap::Subcommand;
use keepchain_core::day::{promise_hint, promise_progress};
use keepchain_core::Command;

use crate::common::{resolve_promise, CliResult, Session};

#[derive(Subcommand)]
pub enum PromiseAction {
    /// Add a promise for today
    Add {
        /// What you promise to do
        text: String,
        /// Category label
        #[arg(long, default_value = "general")]
        tag: String,
    },
    /// Mark a promise as done
    Done {
        /// Position (1-3), id or id prefix
        target: String,
    },
    /// Mark a promise as not done
    Undo {
        /// Position (1-3), id or id prefix
        target: String,
    },
    /// List promises
    List,
    /// Remove every promise (asks first)
    Clear,
}

pub fn run(action: PromiseAction, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;

    match action {
        PromiseAction::Add { text, tag } => {
            session.dispatch(&mut tracker, Command::AddPromise { text, tag })?;
        }
        PromiseAction::Done { target } => {
            let id = resolve_promise(&tracker, &target)?;
            session.dispatch(&mut tracker, Command::TogglePromise { id, done: true })?;
        }
        PromiseAction::Undo { target } => {
            let id = resolve_promise(&tracker, &target)?;
            session.dispatch(&mut tracker, Command::TogglePromise { id, done: false })?;
        }
        PromiseAction::List => {
            let promises = &tracker.state().promises;
            if session.json {
                println!("{}", serde_json::to_string_pretty(promises)?);
            } else {
                let (done, total) = promise_progress(promises);
                println!("{}", promise_hint(done, total));
                for (i, p) in promises.iter().enumerate() {
                    println!(
                        "{}. [{}] {} #{} ({})",
                        i + 1,
                        if p.done { "x" } else { " " },
                        p.text,
                        p.tag,
                        p.id
                    );
                }
            }
        }
        PromiseAction::Clear => {
            session.dispatch(&mut tracker, Command::ClearPromises)?;
        }
    }
    Ok(())
}
