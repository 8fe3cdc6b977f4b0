//! Shared plumbing for CLI commands: opening the tracker, answering
//! prompts and printing outcomes.

use std::error::Error;
use std::io::{BufRead, Write};

use keepchain_core::{Command, Config, Confirm, Dashboard, Outcome, SqliteStore, Tracker};

pub type CliResult = Result<(), Box<dyn Error>>;

/// Global flags shared by every command.
pub struct Session {
    pub json: bool,
    pub yes: bool,
}

impl Session {
    pub fn new(json: bool, yes: bool) -> Self {
        Self { json, yes }
    }

    /// Open the tracker on the default database and apply any pending
    /// day rollover. The rollover is saved with the next applied command.
    pub fn tracker(&self) -> Result<Tracker<SqliteStore>, Box<dyn Error>> {
        let config = Config::load_or_default();
        let store = SqliteStore::open()?;
        let mut tracker = Tracker::open(store, config);
        if let Some(event) = tracker.roll_over() {
            if !self.json {
                eprintln!("{}", event.summary());
            }
        }
        Ok(tracker)
    }

    /// Dispatch one command and print what happened.
    pub fn dispatch(&self, tracker: &mut Tracker<SqliteStore>, command: Command) -> CliResult {
        let mut confirm = StdinConfirm {
            assume_yes: self.yes,
        };
        let outcome = tracker.dispatch(command, &mut confirm)?;
        match &outcome {
            Outcome::Applied(event) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(event)?);
                } else {
                    println!("{}", event.summary());
                    println!("{}", header_line(&tracker.dashboard()));
                }
            }
            Outcome::Declined { prompt } => {
                if self.json {
                    println!(
                        "{}",
                        serde_json::json!({ "type": "declined", "prompt": prompt })
                    );
                } else {
                    println!("cancelled, nothing changed");
                }
            }
        }
        Ok(())
    }
}

/// Reads y/N answers from stdin unless `--yes` was given.
struct StdinConfirm {
    assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// `Tue, Sep 3 2024 | Status: Kept | Chain 3 (longest 9)`
pub fn header_line(dash: &Dashboard) -> String {
    format!(
        "{} | Status: {} | Chain {} (longest {})",
        dash.today.format("%a, %b %-d %Y"),
        status_text(dash.status),
        dash.chain.current,
        dash.chain.longest
    )
}

pub fn status_text(label: keepchain_core::DayLabel) -> &'static str {
    match label {
        keepchain_core::DayLabel::Kept => "Kept ✅",
        keepchain_core::DayLabel::Broken => "Broken ❌",
        keepchain_core::DayLabel::Pending => "Pending",
    }
}

/// Resolve a promise reference: 1-based position, full id or unique id prefix.
pub fn resolve_promise(tracker: &Tracker<SqliteStore>, target: &str) -> Result<String, String> {
    let promises = &tracker.state().promises;
    if let Ok(n) = target.parse::<usize>() {
        if (1..=promises.len()).contains(&n) {
            return Ok(promises[n - 1].id.clone());
        }
    }
    let matches: Vec<_> = promises.iter().filter(|p| p.id.starts_with(target)).collect();
    match matches.as_slice() {
        [one] => Ok(one.id.clone()),
        [] => Ok(target.to_string()),
        _ => Err(format!("promise reference '{target}' is ambiguous")),
    }
}
