use serde::Serialize;
use url::Url;
use urlvet_config::ClientConfig;
use urlvet_config::constants::DEFAULT_BASE_URL;

use crate::error::{ValidationError, ValidationResult};
use crate::response::ValidationResponse;

/// Path appended to the base address for every validation request.
pub const VALIDATE_PATH: &str = "/validate";

/// JSON body sent to the service. Always exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidateRequest<'a> {
    pub url: &'a str,
}

/// Client for a remote URL validation service.
///
/// Cloning is cheap and clones share the underlying connection pool. The
/// client holds no mutable state, so concurrent calls never interfere.
#[derive(Debug, Clone)]
pub struct ValidationClient {
    http: reqwest::Client,
    base_url: String,
    endpoint: String,
}

impl ValidationClient {
    /// Build a client from connection settings.
    pub fn new(config: &ClientConfig) -> ValidationResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = http_client(config).map_err(ValidationError::ClientBuild)?;
        Ok(Self::assemble(http, base_url))
    }

    /// Build a client for `base_url` with default connection settings.
    pub fn from_base_url(base_url: &str) -> ValidationResult<Self> {
        Self::new(&ClientConfig::with_base_url(base_url))
    }

    /// Reuse an existing `reqwest::Client` (and its pool) for validation calls.
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> ValidationResult<Self> {
        Ok(Self::assemble(http, normalize_base_url(base_url)?))
    }

    fn assemble(http: reqwest::Client, base_url: String) -> Self {
        let endpoint = format!("{base_url}{VALIDATE_PATH}");
        Self {
            http,
            base_url,
            endpoint,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the `/validate` endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `url` to the validation service and return its reply unchanged.
    ///
    /// Exactly one POST is issued per call. Non-2xx replies come back as
    /// [`ValidationError::Status`] with the full response attached; transport
    /// failures come back as [`ValidationError::Transport`]. Nothing is retried.
    pub async fn validate_url(&self, url: &str) -> ValidationResult<ValidationResponse> {
        tracing::debug!(endpoint = %self.endpoint, target_url = url, "sending validation request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&ValidateRequest { url })
            .send()
            .await?;
        let response = ValidationResponse::read(response).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(ValidationError::Status {
                status: response.status(),
                response: Box::new(response),
            })
        }
    }
}

impl Default for ValidationClient {
    fn default() -> Self {
        // Building only fails when the TLS backend cannot initialize.
        let http = http_client(&ClientConfig::default()).unwrap_or_else(|err| {
            tracing::warn!("falling back to a bare HTTP client: {err}");
            reqwest::Client::new()
        });
        Self::assemble(http, DEFAULT_BASE_URL.to_owned())
    }
}

fn http_client(config: &ClientConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout() {
        builder = builder.connect_timeout(timeout);
    }
    builder.build()
}

fn normalize_base_url(raw: &str) -> ValidationResult<String> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ValidationError::InvalidBaseUrl {
        base_url: raw.to_owned(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if !parsed.has_host() {
        return Err(invalid("missing host".to_owned()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_owned()));
    }

    Ok(trimmed.trim_end_matches('/').to_owned())
}
