//! Body, mind and growth log commands for CLI.
//!
//! Options left out keep their current value.

use clap::{Args, Subcommand};
use keepchain_core::Command;

use crate::common::{CliResult, Session};

#[derive(Subcommand)]
pub enum BodyAction {
    /// Set calorie target and/or calories consumed today
    Calories {
        #[arg(long)]
        target: Option<u32>,
        #[arg(long)]
        consumed: Option<u32>,
    },
    /// Replace workout notes
    Workout {
        text: String,
    },
    /// Show the body log
    Show,
}

#[derive(Args)]
pub struct MindArgs {
    /// Minutes meditated
    #[arg(long)]
    mins: Option<u32>,
    /// Whether today's meditation is done
    #[arg(long)]
    done: Option<bool>,
    #[arg(long)]
    note: Option<String>,
}

#[derive(Args)]
pub struct GrowthArgs {
    /// Minutes spent learning
    #[arg(long)]
    mins: Option<u32>,
    #[arg(long)]
    topic: Option<String>,
    #[arg(long)]
    note: Option<String>,
}

pub fn run(action: BodyAction, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;

    match action {
        BodyAction::Calories { target, consumed } => {
            let body = &tracker.state().body;
            let command = Command::SetCalories {
                target: target.unwrap_or(body.target),
                consumed: consumed.unwrap_or(body.consumed),
            };
            session.dispatch(&mut tracker, command)?;
        }
        BodyAction::Workout { text } => {
            session.dispatch(&mut tracker, Command::SaveWorkoutNotes { text })?;
        }
        BodyAction::Show => {
            let body = &tracker.state().body;
            if session.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "target": body.target,
                        "consumed": body.consumed,
                        "left": body.calories_left(),
                        "workoutNotes": body.workout_notes,
                    })
                );
            } else {
                println!("Calories left today: {}", body.calories_left());
                println!("Target {} | consumed {}", body.target, body.consumed);
                if !body.workout_notes.is_empty() {
                    println!("Workout notes:\n{}", body.workout_notes);
                }
            }
        }
    }
    Ok(())
}

pub fn mind(args: MindArgs, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;
    let mind = tracker.state().mind.clone();
    session.dispatch(
        &mut tracker,
        Command::SetMeditation {
            mins: args.mins.unwrap_or(mind.mins),
            done: args.done.unwrap_or(mind.done),
            note: args.note.unwrap_or(mind.note),
        },
    )
}

pub fn growth(args: GrowthArgs, session: &Session) -> CliResult {
    let mut tracker = session.tracker()?;
    let growth = tracker.state().growth.clone();
    session.dispatch(
        &mut tracker,
        Command::SetLearning {
            mins: args.mins.unwrap_or(growth.mins),
            topic: args.topic.unwrap_or(growth.topic),
            note: args.note.unwrap_or(growth.note),
        },
    )
}
