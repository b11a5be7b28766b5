// crates/labelbox-client/src/schema/mod.rs
// ============================================================================
// Module: Labelbox Schema
// Description: Typed entities and operations for the Labelbox GraphQL schema.
// Purpose: Map GraphQL nodes to typed objects and expose provisioning operations.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Each entity mirrors one GraphQL node type with a stable field selection
//! (`QUERY_FIELDS`) spliced into every document that returns it. Operations
//! live on the entity they produce or act on and are written against the
//! [`crate::Execute`] seam, so recording wrappers observe every document.
//! Invariants:
//! - Delete operations are soft deletes (`data: {deleted: true}`) and are
//!   idempotent server-side.
//! - Field selections and operation names are wire-exact for the deployed
//!   schema.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod data_row;
pub mod dataset;
pub mod identifiers;
pub mod invite;
pub mod label;
pub mod organization;
pub mod project;
pub mod role;
pub mod user;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use data_row::DataRow;
pub use dataset::Dataset;
pub use identifiers::DataRowId;
pub use identifiers::DatasetId;
pub use identifiers::InviteId;
pub use identifiers::LabelId;
pub use identifiers::OrganizationId;
pub use identifiers::ProjectId;
pub use identifiers::RoleId;
pub use identifiers::UserId;
pub use invite::Invite;
pub use invite::ProjectInvite;
pub use label::Label;
pub use organization::Organization;
pub use project::Project;
pub use role::Role;
pub use user::User;

// ============================================================================
// SECTION: Helpers
// ============================================================================

use serde_json::Value;

use crate::error::ClientError;

/// Extracts a named, non-null object from a response `data` value.
pub(crate) fn take_node(data: &Value, key: &str) -> Result<Value, ClientError> {
    data.get(key)
        .filter(|node| !node.is_null())
        .cloned()
        .ok_or_else(|| ClientError::JsonParse(format!("response carries no `{key}` object")))
}
