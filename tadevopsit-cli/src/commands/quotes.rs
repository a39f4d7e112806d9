//! Quote commands: list, random, favorite

use anyhow::Result;
use clap::{Parser, Subcommand};
use tadevopsit_server::models::Quote;

use super::{print_json, ApiArgs};

use crate::views::{apply_update, render_quote, render_quotes};

#[derive(Parser, Debug)]
pub struct QuotesArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: QuotesCommands,
}

#[derive(Subcommand, Debug)]
pub enum QuotesCommands {
    /// Show the quote feed, most favorited first
    List(FeedArgs),
    /// Show one random quote
    Random,
    /// Favorite a quote
    Favorite(FavoriteArgs),
}

#[derive(Parser, Debug)]
pub struct FeedArgs {
    /// Only show quotes in this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FavoriteArgs {
    /// Quote ID
    pub id: i32,

    /// Only show quotes in this category afterwards
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

pub async fn run_quotes(args: QuotesArgs) -> Result<()> {
    let client = args.api.client()?;
    let json = args.api.json;

    match args.command {
        QuotesCommands::List(feed) => {
            let quotes = client.list_quotes().await?;
            if json {
                print_json(&quotes)
            } else {
                print!("{}", render_quotes(&quotes, feed.category.as_deref()));
                Ok(())
            }
        }
        QuotesCommands::Random => match client.random_quote().await? {
            Some(quote) if json => print_json(&quote),
            Some(quote) => {
                print!("{}", render_quote(&quote));
                Ok(())
            }
            None if json => print_json(&serde_json::Value::Null),
            None => {
                println!("(no quotes)");
                Ok(())
            }
        },
        QuotesCommands::Favorite(favorite) => {
            let mut quotes = client.list_quotes().await?;
            let updated = client.favorite_quote(favorite.id).await?;

            if json {
                return print_json(&updated);
            }

            println!("♥ Quote #{} now has {} favorites", updated.id, updated.favorites);
            apply_update(&mut quotes, updated, |a: &Quote, b: &Quote| a.id == b.id);
            print!("{}", render_quotes(&quotes, favorite.category.as_deref()));
            Ok(())
        }
    }
}
