// crates/labelbox-client/src/lib.rs
// ============================================================================
// Module: Labelbox Client Library
// Description: Minimal typed client for the Labelbox GraphQL API.
// Purpose: Execute GraphQL operations, paginate relationships, map schema nodes.
// Dependencies: reqwest, serde, serde_json, thiserror, time, url
// ============================================================================

//! ## Overview
//! Labelbox Client provides the blocking GraphQL transport ([`Client`]), the
//! generic paginated-fetch engine ([`PaginatedCollection`]), and typed schema
//! entities with the operations an integration suite provisions through.
//! Invariants:
//! - Every operation embeds its GraphQL document verbatim; operation names
//!   carry the `PyApi` suffix required by the deployed schema.
//! - Transport errors, GraphQL errors, and malformed responses surface as
//!   [`ClientError`] values; nothing is retried or cached.
//! - Experimental operations are refused unless the client opted in.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod error;
pub mod pagination;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::Client;
pub use client::Execute;
pub use error::ClientError;
pub use pagination::DEFAULT_PAGE_SIZE;
pub use pagination::FromNode;
pub use pagination::PaginatedCollection;
pub use schema::DataRow;
pub use schema::DataRowId;
pub use schema::Dataset;
pub use schema::DatasetId;
pub use schema::Invite;
pub use schema::InviteId;
pub use schema::Label;
pub use schema::LabelId;
pub use schema::Organization;
pub use schema::OrganizationId;
pub use schema::Project;
pub use schema::ProjectId;
pub use schema::ProjectInvite;
pub use schema::Role;
pub use schema::RoleId;
pub use schema::User;
pub use schema::UserId;
