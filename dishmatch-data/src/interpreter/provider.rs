//! `QueryInterpreter` backed by an HTTP service.

use std::time::Duration;

use dishmatch_core::{InterpretError, QueryAttributes, QueryInterpreter};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::wire::{InterpretRequest, decode_attributes};

/// Errors raised while building an [`HttpQueryInterpreter`].
#[derive(Debug, Error)]
pub enum InterpreterBuildError {
    /// The configured endpoint is not an absolute HTTP(S) URL.
    #[error("invalid interpreter endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Why the endpoint was rejected.
        reason: String,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime")]
    Runtime(#[source] std::io::Error),
}

/// Default interpreter endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/interpret";

/// Default user agent for interpreter requests.
pub const DEFAULT_USER_AGENT: &str = "dishmatch/0.1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpQueryInterpreter`].
#[derive(Debug, Clone)]
pub struct HttpQueryInterpreterConfig {
    /// Absolute URL the query is POSTed to.
    pub endpoint: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpQueryInterpreterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpQueryInterpreterConfig {
    /// Create a configuration for `endpoint` with default timeout and agent.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Interpreter client speaking JSON over HTTP.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the request runs on the interpreter's own
/// current-thread runtime. Inside a multi-threaded runtime it runs on the
/// ambient handle through [`tokio::task::block_in_place`]. Inside a
/// `current_thread` runtime it falls back to the owned runtime, which blocks
/// the caller's runtime for the duration of the request.
pub struct HttpQueryInterpreter {
    client: Client,
    endpoint: Url,
    timeout: Duration,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpQueryInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpQueryInterpreter")
            .field("client", &self.client)
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpQueryInterpreter {
    /// Create an interpreter for `endpoint` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, InterpreterBuildError> {
        Self::with_config(HttpQueryInterpreterConfig::new(endpoint))
    }

    /// Create an interpreter from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpQueryInterpreterConfig) -> Result<Self, InterpreterBuildError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(InterpreterBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(InterpreterBuildError::Runtime)?;
        Ok(Self {
            client,
            endpoint,
            timeout: config.timeout,
            runtime,
        })
    }

    /// Return the endpoint queries are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn interpret_async(&self, text: &str) -> Result<QueryAttributes, InterpretError> {
        let url = self.endpoint.as_str();
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&InterpretRequest { query: text })
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?;

        let body: Value = response.json().await.map_err(|err| {
            if err.is_timeout() {
                self.convert_reqwest_error(&err)
            } else {
                InterpretError::Parse {
                    message: err.to_string(),
                }
            }
        })?;
        let attributes = decode_attributes(&body)?;
        debug!("interpreter at {url} returned {} attribute(s)", attributes.len());
        Ok(attributes)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> InterpretError {
        let url = self.endpoint.to_string();
        if error.is_timeout() {
            return InterpretError::Timeout {
                url,
                timeout_secs: self.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return InterpretError::Http {
                url,
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        InterpretError::Network {
            url,
            message: error.to_string(),
        }
    }
}

impl QueryInterpreter for HttpQueryInterpreter {
    fn interpret(&self, text: &str) -> Result<QueryAttributes, InterpretError> {
        let future = self.interpret_async(text);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, InterpreterBuildError> {
    let invalid = |reason: String| InterpreterBuildError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    };
    let url = Url::parse(endpoint).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
