//! Locales command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use weft_http::ContentClient;

use crate::output;

#[derive(Args, Debug)]
pub struct LocalesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: LocalesArgs, client: &ContentClient) -> Result<()> {
    let locales = client
        .fetch_locales()
        .await
        .context("Failed to fetch locales")?;

    if args.json {
        return output::json_pretty(&locales);
    }

    for locale in &locales {
        let marker = if locale.default {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        let fallback = locale
            .fallback_code
            .as_deref()
            .map(|code| format!(" (falls back to {})", code))
            .unwrap_or_default();
        println!("{} {:<8} {}{}", marker, locale.code, locale.name, fallback.dimmed());
    }

    Ok(())
}
