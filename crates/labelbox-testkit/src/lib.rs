// crates/labelbox-testkit/src/lib.rs
// ============================================================================
// Module: Labelbox Testkit Library
// Description: Fixtures and helper queries for integration-testing the client.
// Purpose: Provision and tear down ephemeral Labelbox resources per test.
// Dependencies: labelbox-client, rand, regex, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! The testkit ports the integration-suite support layer: environment
//! selection, a query-recording client wrapper, invite helper queries, a
//! random value generator, and RAII fixtures that provision a resource for
//! one test and tear it down afterwards.
//! Invariants:
//! - Every dispatched operation name matches the `…PyApi` convention unless
//!   a call explicitly bypasses the check.
//! - Fixtures tear down what they provisioned, in reverse creation order,
//!   with a best-effort `Drop` backstop for panicking tests.
//! - Nothing here retries, caches, or parallelizes; errors from the client
//!   propagate unchanged.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod environ;
pub mod error;
pub mod fixtures;
pub mod integration;
pub mod queries;
pub mod random;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use environ::ENVIRON_VAR;
pub use environ::Environ;
pub use environ::EnvironError;
pub use environ::IMG_URL;
pub use environ::PROD_API_KEY_VAR;
pub use environ::STAGING_API_KEY_VAR;
pub use environ::sample_video;
pub use error::TestkitError;
pub use fixtures::DatasetFixture;
pub use fixtures::LabelPack;
pub use fixtures::OrganizationFixture;
pub use fixtures::ProjectBasedUserFixture;
pub use fixtures::ProjectFixture;
pub use fixtures::ProjectPack;
pub use integration::ExecutedQuery;
pub use integration::IntegrationClient;
pub use queries::cancel_invite;
pub use queries::get_invites;
pub use queries::get_project_invites;
pub use random::FieldKind;
pub use random::RandValue;
pub use random::rand_name;
pub use random::rand_timestamp;
pub use random::rand_value;
