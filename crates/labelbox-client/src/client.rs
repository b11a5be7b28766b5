// crates/labelbox-client/src/client.rs
// ============================================================================
// Module: Labelbox GraphQL Transport
// Description: Blocking GraphQL client for the Labelbox API.
// Purpose: Execute GraphQL documents with bearer authorization.
// Dependencies: reqwest, serde_json, url
// ============================================================================

//! ## Overview
//! [`Client`] posts GraphQL documents to a single endpoint with bearer
//! authorization and returns the `data` value of each response.
//! Invariants:
//! - Redirected responses fail closed; the configured endpoint is the only
//!   origin the client talks to.
//! - A response carrying an `errors` array fails the call even when partial
//!   `data` is present.
//! - Experimental operations require [`Client::with_experimental`].
//!
//! [`Execute`] is the seam test doubles and recording wrappers implement.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use serde_json::json;
use url::Url;

use crate::error::ClientError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Request timeout applied to every GraphQL call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// SECTION: Execute Trait
// ============================================================================

/// Executes GraphQL documents against the Labelbox API.
///
/// Schema operations and the pagination engine are written against this
/// trait so wrappers can observe or reject documents before dispatch.
pub trait Execute: Send + Sync {
    /// Executes a GraphQL document and returns the response `data` value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when transport, authorization, or GraphQL
    /// execution fails.
    fn execute(&self, query: &str, variables: Value) -> Result<Value, ClientError>;

    /// Executes a GraphQL document gated behind the experimental opt-in.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Experimental`] when the implementation has not
    /// opted in, and the same errors as [`Execute::execute`] otherwise.
    fn execute_experimental(&self, query: &str, variables: Value) -> Result<Value, ClientError>;
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking Labelbox GraphQL client.
///
/// # Invariants
/// - `endpoint` is always an absolute `http` or `https` URL.
/// - The underlying HTTP client never follows redirects.
#[derive(Debug, Clone)]
pub struct Client {
    /// HTTP client used for GraphQL requests.
    http: HttpClient,
    /// GraphQL endpoint all documents are posted to.
    endpoint: Url,
    /// API key sent as a bearer token.
    api_key: String,
    /// Whether experimental operations are permitted.
    enable_experimental: bool,
}

impl Client {
    /// Builds a client for the given API key and GraphQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] when the endpoint does not
    /// parse or is not `http`/`https`, and [`ClientError::Http`] when the
    /// HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>, endpoint: &str) -> Result<Self, ClientError> {
        let endpoint =
            Url::parse(endpoint).map_err(|err| ClientError::InvalidEndpoint(err.to_string()))?;
        match endpoint.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ClientError::InvalidEndpoint(format!(
                    "unsupported scheme: {scheme}"
                )));
            }
        }
        let http = HttpClient::builder()
            .redirect(Policy::none())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ClientError::Http(err.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            api_key: api_key.into(),
            enable_experimental: false,
        })
    }

    /// Enables or disables experimental operations.
    #[must_use]
    pub const fn with_experimental(mut self, enabled: bool) -> Self {
        self.enable_experimental = enabled;
        self
    }

    /// Returns the configured GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns whether experimental operations are permitted.
    #[must_use]
    pub const fn experimental_enabled(&self) -> bool {
        self.enable_experimental
    }

    /// Posts the document and maps the GraphQL response envelope.
    fn send(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        let body = json!({
            "query": query,
            "variables": variables,
        });
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|err| ClientError::Http(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Auth(format!("http status {status}")));
        }
        if !status.is_success() {
            return Err(ClientError::Http(format!("http status {status}")));
        }

        let payload: Value =
            response.json().map_err(|err| ClientError::JsonParse(err.to_string()))?;
        if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
            let message = errors
                .first()
                .and_then(|entry| entry.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("unspecified graphql error")
                .to_string();
            return Err(ClientError::Graphql {
                message,
            });
        }
        match payload.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(ClientError::JsonParse("response carries no data value".to_string())),
        }
    }
}

impl Execute for Client {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        self.send(query, variables)
    }

    fn execute_experimental(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        if !self.enable_experimental {
            return Err(ClientError::Experimental(
                "client was built without experimental support".to_string(),
            ));
        }
        self.send(query, variables)
    }
}
