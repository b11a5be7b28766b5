// crates/labelbox-testkit/src/fixtures/mod.rs
// ============================================================================
// Module: Testkit Fixtures
// Description: RAII fixtures provisioning ephemeral Labelbox resources.
// Purpose: Give each test a ready resource and tear it down afterwards.
// Dependencies: labelbox-client
// ============================================================================

//! ## Overview
//! Every fixture provisions its resource on construction, exposes it for the
//! test body, and tears it down through `teardown`. Teardown is fallible so
//! a suite can surface cleanup failures; `Drop` runs the same cleanup
//! best-effort when a test panics before calling it.
//! Invariants:
//! - Resources are deleted in reverse creation order.
//! - A fixture whose construction fails leaves nothing behind: partially
//!   provisioned resources are deleted before the error is returned.
//! - Teardown is idempotent; deletes are soft deletes server-side.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod dataset;
pub mod label_pack;
pub mod organization;
pub mod project;
pub mod user;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dataset::DatasetFixture;
pub use label_pack::LabelPack;
pub use organization::OrganizationFixture;
pub use organization::cancel_stale_invites;
pub use project::ProjectFixture;
pub use project::ProjectPack;
pub use user::ProjectBasedUserFixture;
