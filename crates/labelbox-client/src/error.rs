// crates/labelbox-client/src/error.rs
// ============================================================================
// Module: Labelbox Client Errors
// Description: Error types for transport, GraphQL, and response mapping failures.
// Purpose: Give callers stable variants for programmatic handling.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! All client operations return [`ClientError`]. Variants distinguish
//! endpoint misconfiguration, transport failures, authorization failures,
//! server-reported GraphQL errors, and malformed responses. Errors propagate
//! unchanged to callers; the client never retries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Client Errors
// ============================================================================

/// Errors returned by the Labelbox client.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint URL failed to parse or used an unsupported scheme.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// HTTP transport failed or returned a non-success status.
    #[error("http failure: {0}")]
    Http(String),
    /// Server rejected the request credentials.
    #[error("authorization failure: {0}")]
    Auth(String),
    /// Server reported a GraphQL execution error.
    #[error("graphql failure: {message}")]
    Graphql {
        /// Message of the first reported GraphQL error.
        message: String,
    },
    /// Response body could not be decoded into the expected shape.
    #[error("response decode failure: {0}")]
    JsonParse(String),
    /// Requested object does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),
    /// Query was rejected before dispatch.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// Experimental operation attempted without opting in.
    #[error("experimental operation refused: {0}")]
    Experimental(String),
}
