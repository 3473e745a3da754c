//! CLI argument definitions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use weft_core::ApiUrl;
use weft_http::{Api, ClientConfig, ContentClient};

use crate::commands::{entries, locales, posts, schema};

/// Content delivery CLI tool for space exploration.
#[derive(Parser, Debug)]
#[command(name = "weft")]
#[command(author, version = env!("WEFT_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which space to talk to and how.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Space ID
    #[arg(long, env = "CONTENTFUL_SPACE_ID", global = true)]
    pub space: Option<String>,

    /// Delivery or preview access token
    #[arg(long, env = "CONTENTFUL_AUTH_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Space environment
    #[arg(long, env = "CONTENTFUL_ENVIRONMENT", default_value = "master", global = true)]
    pub environment: String,

    /// Use the preview API
    #[arg(long, env = "CONTENTFUL_PREVIEW", global = true)]
    pub preview: bool,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Locale for entry requests
    #[arg(long, env = "CONTENTFUL_LOCALE", global = true)]
    pub locale: Option<String>,
}

impl ConnectionArgs {
    /// Build the configuration these arguments describe.
    pub fn config(&self) -> Result<ClientConfig> {
        let space = self
            .space
            .clone()
            .context("No space given. Pass --space or set CONTENTFUL_SPACE_ID.")?;
        let token = self
            .token
            .clone()
            .context("No access token given. Pass --token or set CONTENTFUL_AUTH_TOKEN.")?;

        let mut config = ClientConfig::new(space, token).with_environment(&self.environment);
        if self.preview {
            config = config.with_api(Api::Preview);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(ApiUrl::new(base_url).context("Invalid base URL")?);
        }
        if let Some(locale) = &self.locale {
            config = config.with_locale(locale);
        }
        Ok(config)
    }

    /// Build a client from these arguments.
    pub fn client(&self) -> Result<ContentClient> {
        ContentClient::new(self.config()?).context("Failed to create client")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show content types and the shape of each field
    Schema(schema::SchemaArgs),

    /// List the locales of the environment
    Locales(locales::LocalesArgs),

    /// Fetch one raw page of entries
    Entries(entries::EntriesArgs),

    /// Iterate resolved blog posts
    Posts(posts::PostsArgs),
}
