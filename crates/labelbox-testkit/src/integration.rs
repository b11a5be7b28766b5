// crates/labelbox-testkit/src/integration.rs
// ============================================================================
// Module: Integration Client
// Description: Query-recording wrapper around the Labelbox client.
// Purpose: Observe and police every document the suite dispatches.
// Dependencies: labelbox-client, regex, serde_json
// ============================================================================

//! ## Overview
//! [`IntegrationClient`] wraps [`Client`] for suite use: experimental
//! operations are always enabled, every dispatched `(query, variables)` pair
//! is recorded for later inspection, and operation names are checked against
//! the `…PyApi` convention before dispatch.
//! Invariants:
//! - A document failing the naming check is neither recorded nor dispatched.
//! - Recording never reorders; `executed_queries` returns dispatch order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

use labelbox_client::Client;
use labelbox_client::ClientError;
use labelbox_client::Execute;
use regex::Regex;
use serde_json::Value;

use crate::environ::Environ;
use crate::error::TestkitError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Pattern every dispatched operation name must match.
const QUERY_NAMING_PATTERN: &str = r"^(?:query|mutation) \w+PyApi";

// ============================================================================
// SECTION: Executed Queries
// ============================================================================

/// One `(query, variables)` pair dispatched through the integration client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedQuery {
    /// GraphQL document that was dispatched.
    pub query: String,
    /// Variables the document was dispatched with.
    pub variables: Value,
}

// ============================================================================
// SECTION: Integration Client
// ============================================================================

/// Recording, naming-checked client wrapper for the integration suite.
///
/// # Invariants
/// - The wrapped client always has experimental operations enabled.
#[derive(Debug)]
pub struct IntegrationClient {
    /// Wrapped Labelbox client.
    inner: Client,
    /// Dispatched queries in order.
    executed: Mutex<Vec<ExecutedQuery>>,
}

impl IntegrationClient {
    /// Builds a client for the deployment selected by the environment.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when credential resolution or client
    /// construction fails.
    pub fn from_environ(environ: Environ) -> Result<Self, TestkitError> {
        let api_key = environ.testing_api_key()?;
        let inner = Client::new(api_key, environ.graphql_url())?.with_experimental(true);
        Ok(Self::from_client(inner))
    }

    /// Builds a client from explicit parts, for suites driving a local stub.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when client construction fails.
    pub fn with_parts(api_key: impl Into<String>, endpoint: &str) -> Result<Self, TestkitError> {
        let inner = Client::new(api_key, endpoint)?.with_experimental(true);
        Ok(Self::from_client(inner))
    }

    /// Wraps an already-built client.
    fn from_client(inner: Client) -> Self {
        Self {
            inner,
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Returns every dispatched query in dispatch order.
    #[must_use]
    pub fn executed_queries(&self) -> Vec<ExecutedQuery> {
        self.executed.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Checks a document against the operation-naming convention.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidQuery`] when the document does not open
    /// with a conforming operation name.
    pub fn check_naming(query: &str) -> Result<(), ClientError> {
        let pattern = naming_pattern()?;
        if pattern.is_match(query) {
            Ok(())
        } else {
            Err(ClientError::InvalidQuery(format!(
                "operation name must match `{QUERY_NAMING_PATTERN}`: {query}"
            )))
        }
    }

    /// Dispatches a document without the naming check.
    ///
    /// The pair is still recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the underlying call fails.
    pub fn execute_unchecked(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        self.record(query, &variables);
        self.inner.execute(query, variables)
    }

    /// Appends one dispatched pair to the record.
    fn record(&self, query: &str, variables: &Value) {
        self.executed.lock().unwrap_or_else(PoisonError::into_inner).push(ExecutedQuery {
            query: query.to_string(),
            variables: variables.clone(),
        });
    }
}

impl Execute for IntegrationClient {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        Self::check_naming(query)?;
        self.record(query, &variables);
        self.inner.execute(query, variables)
    }

    fn execute_experimental(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        Self::check_naming(query)?;
        self.record(query, &variables);
        self.inner.execute_experimental(query, variables)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the compiled naming pattern, compiling it on first use.
fn naming_pattern() -> Result<&'static Regex, ClientError> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    if let Some(pattern) = PATTERN.get() {
        return Ok(pattern);
    }
    let pattern = Regex::new(QUERY_NAMING_PATTERN)
        .map_err(|err| ClientError::InvalidQuery(err.to_string()))?;
    Ok(PATTERN.get_or_init(|| pattern))
}
