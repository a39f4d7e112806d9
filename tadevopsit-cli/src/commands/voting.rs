//! Voting board commands: list, vote

use anyhow::Result;
use clap::{Parser, Subcommand};
use tadevopsit_server::models::Tool;

use super::{print_json, ApiArgs};

use crate::views::{apply_update, render_board};

#[derive(Parser, Debug)]
pub struct VotingArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: VotingCommands,
}

#[derive(Subcommand, Debug)]
pub enum VotingCommands {
    /// Show the board grouped by category
    List(BoardArgs),
    /// Vote for a tool
    Vote(VoteArgs),
}

#[derive(Parser, Debug)]
pub struct BoardArgs {
    /// Only show this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(Parser, Debug)]
pub struct VoteArgs {
    /// Tool ID
    pub id: i32,

    /// Only show this category afterwards
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

pub async fn run_voting(args: VotingArgs) -> Result<()> {
    let client = args.api.client()?;
    let json = args.api.json;

    match args.command {
        VotingCommands::List(board) => {
            let tools = client.list_tools().await?;
            if json {
                print_json(&tools)
            } else {
                print!("{}", render_board(&tools, board.category.as_deref()));
                Ok(())
            }
        }
        VotingCommands::Vote(vote) => {
            let mut tools = client.list_tools().await?;
            let updated = client.vote_tool(vote.id).await?;

            if json {
                return print_json(&updated);
            }

            println!("✓ Voted for {} ({} votes)", updated.name, updated.votes);
            apply_update(&mut tools, updated, |a: &Tool, b: &Tool| a.id == b.id);
            print!("{}", render_board(&tools, vote.category.as_deref()));
            Ok(())
        }
    }
}
