//! Content API base URL type.

use url::Url;

use crate::error::{Error, InvalidInputError};

/// Base URL of a delivery or preview API.
///
/// Plain HTTP is accepted only for loopback hosts, which is what mock
/// servers in tests bind to.
///
/// # Example
///
/// ```
/// use weft_core::ApiUrl;
///
/// let api = ApiUrl::new("https://cdn.contentful.com").unwrap();
/// assert_eq!(
///     api.space_url("cfexampleapi", "master", "entries"),
///     "https://cdn.contentful.com/spaces/cfexampleapi/environments/master/entries"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Parse and check a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::ApiUrl`] for unparseable URLs, URLs
    /// without a host, and non-HTTPS URLs to anything but loopback.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let reject = |reason: String| -> Error {
            InvalidInputError::ApiUrl {
                value: s.to_string(),
                reason,
            }
            .into()
        };

        let url = Url::parse(s).map_err(|e| reject(e.to_string()))?;
        let Some(host) = url.host_str() else {
            return Err(reject("must have a host".to_string()));
        };
        let loopback = matches!(host, "localhost" | "127.0.0.1" | "[::1]");
        match url.scheme() {
            "https" => {}
            "http" if loopback => {}
            other => return Err(reject(format!("scheme '{}' is not https", other))),
        }

        Ok(Self(url))
    }

    /// Returns `{base}/spaces/{space}/environments/{environment}/{path}`.
    pub fn space_url(&self, space: &str, environment: &str, path: &str) -> String {
        format!(
            "{}/spaces/{}/environments/{}/{}",
            self.0.as_str().trim_end_matches('/'),
            space,
            environment,
            path.trim_start_matches('/')
        )
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}
