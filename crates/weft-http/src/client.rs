//! Content delivery HTTP client.

use std::fmt;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use weft_core::error::{DecodeError, Error, InvalidInputError, ProtocolError, TransportError};
use weft_core::{ApiUrl, Result};

use crate::config::ClientConfig;
use crate::endpoints::ErrorResponse;

/// Response header carrying the request ID when the body does not.
const REQUEST_ID_HEADER: &str = "x-contentful-request-id";

/// HTTP client for one space environment.
#[derive(Clone)]
pub struct CdnClient {
    client: reqwest::Client,
    base: ApiUrl,
    space: String,
    environment: String,
}

impl CdnClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete, the base URL is
    /// invalid, or the token cannot be sent as a header.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base = config.resolved_base_url()?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token)).map_err(
            |_| InvalidInputError::Config {
                message: "access token contains invalid header characters".to_string(),
            },
        )?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base,
            space: config.space.clone(),
            environment: config.environment.clone(),
        })
    }

    /// Returns the base URL this client sends requests to.
    pub fn base_url(&self) -> &ApiUrl {
        &self.base
    }

    pub fn space(&self) -> &str {
        &self.space
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the URL of a resource in this client's space environment.
    pub fn url(&self, path: &str) -> String {
        self.base.space_url(&self.space, &self.environment, path)
    }

    /// GET a space-scoped resource and decode the JSON body.
    #[instrument(skip(self, params), fields(space = %self.space, environment = %self.environment))]
    pub async fn get<Q, R>(&self, path: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(path, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Decode a success body or map an error body.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if !status.is_success() {
            let error = self.parse_error_response(response).await;
            debug!(%error, "request failed");
            return Err(Error::Protocol(error));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body)
            .map_err(|e| DecodeError::new(std::any::type_name::<R>(), e).into())
    }

    /// Build a protocol error from a non-success response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();
        let header_request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        match response.json::<ErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.sys.map(|s| s.id), body.message)
                .with_request_id(body.request_id.or(header_request_id)),
            Err(_) => ProtocolError::new(status, None, None).with_request_id(header_request_id),
        }
    }
}

impl fmt::Debug for CdnClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdnClient")
            .field("base", &self.base.as_str())
            .field("space", &self.space)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Map a reqwest failure onto the transport error kinds.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
