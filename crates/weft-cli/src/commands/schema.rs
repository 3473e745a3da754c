//! Schema command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use weft_http::ContentClient;

use crate::output;

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Name used for the polymorphic entry type in type hints
    #[arg(long, default_value = "Entry")]
    pub union: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ContentTypeSummary {
    id: String,
    name: String,
    fields: Vec<FieldSummary>,
}

#[derive(Serialize)]
struct FieldSummary {
    id: String,
    shape: String,
    rust_type: String,
}

pub async fn run(args: SchemaArgs, client: &ContentClient) -> Result<()> {
    let schema = client
        .fetch_schema()
        .await
        .context("Failed to fetch content types")?;

    let summaries: Vec<ContentTypeSummary> = schema
        .iter()
        .map(|ct| ContentTypeSummary {
            id: ct.id.to_string(),
            name: ct.type_name(),
            fields: schema
                .classify_content_type(ct)
                .iter()
                .map(|f| FieldSummary {
                    id: f.field.id.clone(),
                    shape: f.shape.to_string(),
                    rust_type: f.shape.type_hint(ct, &schema, &args.union),
                })
                .collect(),
        })
        .collect();

    if args.json {
        return output::json_pretty(&summaries);
    }

    if summaries.is_empty() {
        output::note("No content types found.");
        return Ok(());
    }

    for ct in &summaries {
        output::heading(&format!("{} ({})", ct.name, ct.id));
        for field in &ct.fields {
            println!(
                "  {:<24} {:<28} {}",
                field.id,
                field.shape.cyan(),
                field.rust_type.dimmed()
            );
        }
        println!();
    }

    Ok(())
}
