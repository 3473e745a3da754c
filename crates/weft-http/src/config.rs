//! Client configuration.

use std::fmt;
use std::time::Duration;

use weft_core::error::InvalidInputError;
use weft_core::{ApiUrl, Result};

/// Environment variable holding the space ID.
pub const ENV_SPACE_ID: &str = "CONTENTFUL_SPACE_ID";
/// Environment variable holding the delivery or preview access token.
pub const ENV_AUTH_TOKEN: &str = "CONTENTFUL_AUTH_TOKEN";
/// Environment variable naming the space environment.
pub const ENV_ENVIRONMENT: &str = "CONTENTFUL_ENVIRONMENT";
/// Environment variable holding the default locale.
pub const ENV_LOCALE: &str = "CONTENTFUL_LOCALE";
/// Environment variable selecting the preview API (`1` or `true`).
pub const ENV_PREVIEW: &str = "CONTENTFUL_PREVIEW";

/// Environment used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "master";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which content API to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Api {
    /// Published content.
    #[default]
    Delivery,
    /// Draft and published content.
    Preview,
}

impl Api {
    /// The public base URL of this API.
    pub fn base_url(&self) -> &'static str {
        match self {
            Api::Delivery => "https://cdn.contentful.com",
            Api::Preview => "https://preview.contentful.com",
        }
    }
}

/// Settings for a [`ContentClient`](crate::ContentClient).
#[derive(Clone)]
pub struct ClientConfig {
    pub space: String,
    pub environment: String,
    pub access_token: String,
    pub api: Api,
    /// Overrides the API's base URL (e.g. a proxy or a mock server).
    pub base_url: Option<ApiUrl>,
    /// Locale sent with page requests that do not name one.
    pub locale: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for the delivery API of `space`.
    pub fn new(space: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            access_token: access_token.into(),
            api: Api::default(),
            base_url: None,
            locale: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("weft/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Read configuration from the `CONTENTFUL_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the space ID or access token is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, using the same keys as
    /// [`ClientConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| InvalidInputError::Config {
                    message: format!("{} is not set", key),
                })
        };

        let mut config = Self::new(required(ENV_SPACE_ID)?, required(ENV_AUTH_TOKEN)?);
        if let Some(environment) = lookup(ENV_ENVIRONMENT).filter(|v| !v.is_empty()) {
            config.environment = environment;
        }
        config.locale = lookup(ENV_LOCALE).filter(|v| !v.is_empty());
        if lookup(ENV_PREVIEW).is_some_and(|v| matches!(v.as_str(), "1" | "true" | "yes")) {
            config.api = Api::Preview;
        }
        Ok(config)
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_api(mut self, api: Api) -> Self {
        self.api = api;
        self
    }

    pub fn with_base_url(mut self, base_url: ApiUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL requests are sent to.
    pub fn resolved_base_url(&self) -> Result<ApiUrl> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => ApiUrl::new(self.api.base_url()),
        }
    }

    /// Check that the configuration can be used to build a client.
    pub fn validate(&self) -> Result<()> {
        if self.space.trim().is_empty() {
            return Err(InvalidInputError::Config {
                message: "space ID cannot be empty".to_string(),
            }
            .into());
        }
        if self.environment.trim().is_empty() {
            return Err(InvalidInputError::Config {
                message: "environment cannot be empty".to_string(),
            }
            .into());
        }
        if self.access_token.is_empty() {
            return Err(InvalidInputError::Config {
                message: "access token cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("space", &self.space)
            .field("environment", &self.environment)
            .field("access_token", &"<redacted>")
            .field("api", &self.api)
            .field("base_url", &self.base_url)
            .field("locale", &self.locale)
            .field("timeout", &self.timeout)
            .finish()
    }
}
