// crates/labelbox-testkit/src/error.rs
// ============================================================================
// Module: Testkit Errors
// Description: Error types for fixture provisioning and helper queries.
// Purpose: Give test code stable variants for programmatic handling.
// Dependencies: labelbox-client, thiserror
// ============================================================================

//! ## Overview
//! Fixture and helper failures surface as [`TestkitError`]. Client and
//! environment errors are wrapped, not translated; everything else names the
//! testkit-level condition that failed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use labelbox_client::ClientError;
use thiserror::Error;

use crate::environ::EnvironError;
use crate::random::FieldKind;

// ============================================================================
// SECTION: Testkit Errors
// ============================================================================

/// Errors returned by testkit fixtures and helpers.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum TestkitError {
    /// Environment selection or credential lookup failed.
    #[error("environment failure: {0}")]
    Environ(#[from] EnvironError),
    /// Underlying client call failed.
    #[error("client failure: {0}")]
    Client(#[from] ClientError),
    /// Random value generation was asked for an unsupported field kind.
    #[error("random values are not supported for field kind {0}")]
    UnsupportedFieldKind(FieldKind),
    /// Organization does not expose the named role.
    #[error("organization has no `{0}` role")]
    MissingRole(String),
    /// Membership mutation returned no new user id.
    #[error("member mutation returned no new user id")]
    UserNotCreated,
}
