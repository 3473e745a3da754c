//! Entries command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use weft_core::PageQuery;
use weft_core::iter::{DEFAULT_INCLUDE, DEFAULT_LIMIT};
use weft_http::ContentClient;

use crate::output;

#[derive(Args, Debug)]
pub struct EntriesArgs {
    /// Content type ID
    #[arg(long)]
    pub content_type: String,

    /// Maximum number of entries to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Number of entries to skip
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    /// Link depth to include
    #[arg(long, default_value_t = DEFAULT_INCLUDE)]
    pub include: u32,

    /// Output the page as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: EntriesArgs, client: &ContentClient) -> Result<()> {
    let query = PageQuery {
        content_type: args.content_type.clone(),
        skip: args.skip,
        limit: args.limit,
        include: args.include,
        locale: None,
    };

    let page = client
        .fetch_raw_page(&query)
        .await
        .context("Failed to fetch entries")?;

    if args.json || args.pretty {
        return if args.pretty {
            output::json_pretty(&page)
        } else {
            output::json(&page)
        };
    }

    if page.items.is_empty() {
        output::note("No entries found.");
        return Ok(());
    }

    for entry in &page.items {
        println!("{}  {}", entry.id(), entry.content_type().as_str().cyan());
    }

    eprintln!();
    output::field("Total", &page.total.to_string());
    output::field("Skip", &page.skip.to_string());
    output::field("Included entries", &page.includes.entries.len().to_string());
    output::field("Included assets", &page.includes.assets.len().to_string());

    Ok(())
}
