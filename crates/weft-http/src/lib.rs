//! weft-http - HTTP transport for weft
//!
//! Implements [`weft_core::PageSource`] against the Contentful delivery and
//! preview APIs.
//!
//! # Example
//!
//! ```no_run
//! use weft_core::{ListOptions, Model};
//! use weft_http::{ClientConfig, ContentClient};
//!
//! # async fn example<T: Model>() -> Result<(), weft_core::Error> {
//! let client = ContentClient::new(ClientConfig::from_env()?)?;
//! let schema = client.fetch_schema().await?;
//! println!("{} content types", schema.len());
//!
//! let mut entries = client.list::<T>(ListOptions::default());
//! while let Some(entry) = entries.next().await? {
//!     // ...
//! #   let _ = entry;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod content;
pub mod endpoints;

pub use client::CdnClient;
pub use config::{Api, ClientConfig};
pub use content::ContentClient;
pub use endpoints::Locale;
