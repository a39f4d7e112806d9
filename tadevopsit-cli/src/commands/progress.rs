//! Progress commands: list, complete, toggle, reset

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tadevopsit_server::models::{ProgressEntry, ProgressUpdate};

use super::{print_json, ApiArgs};

use crate::client::ApiClient;
use crate::views::{apply_update, render_progress};

#[derive(Parser, Debug)]
pub struct ProgressArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: ProgressCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProgressCommands {
    /// Show the 30-day grid
    List,
    /// Mark a day complete, optionally with what you learned
    Complete(CompleteArgs),
    /// Flip a day's completion (clears its feedback)
    Toggle(DayArgs),
    /// Mark a day not complete (clears its feedback)
    Reset(DayArgs),
}

#[derive(Parser, Debug)]
pub struct CompleteArgs {
    /// Day of the plan (1-30)
    pub day: i32,

    /// What you learned that day
    #[arg(long, short = 'f')]
    pub feedback: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DayArgs {
    /// Day of the plan (1-30)
    pub day: i32,
}

pub async fn run_progress(args: ProgressArgs) -> Result<()> {
    let client = args.api.client()?;
    let json = args.api.json;

    match args.command {
        ProgressCommands::List => {
            let entries = client.list_progress().await?;
            if json {
                print_json(&entries)
            } else {
                print!("{}", render_progress(&entries));
                Ok(())
            }
        }
        ProgressCommands::Complete(complete) => {
            let update = ProgressUpdate {
                completed: true,
                feedback: normalize_feedback(complete.feedback),
            };
            apply(&client, complete.day, update, json).await
        }
        ProgressCommands::Toggle(day) => {
            let entries = client.list_progress().await?;
            let current = entries
                .iter()
                .find(|e| e.day == day.day)
                .ok_or_else(|| anyhow!("Day {} is not part of the plan", day.day))?;
            let update = ProgressUpdate {
                completed: !current.completed,
                feedback: None,
            };
            apply(&client, day.day, update, json).await
        }
        ProgressCommands::Reset(day) => {
            let update = ProgressUpdate {
                completed: false,
                feedback: None,
            };
            apply(&client, day.day, update, json).await
        }
    }
}

/// Send the update, then patch the fetched grid with the returned row.
async fn apply(client: &ApiClient, day: i32, update: ProgressUpdate, json: bool) -> Result<()> {
    let mut entries = client.list_progress().await?;
    let updated = client.update_progress(day, &update).await?;

    if json {
        return print_json(&updated);
    }

    let status = if updated.completed { "complete" } else { "not complete" };
    apply_update(&mut entries, updated, |a: &ProgressEntry, b: &ProgressEntry| a.day == b.day);
    println!("✓ Day {} marked {}", day, status);
    print!("{}", render_progress(&entries));
    Ok(())
}

/// Blank feedback is sent as null
fn normalize_feedback(feedback: Option<String>) -> Option<String> {
    feedback
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
}
