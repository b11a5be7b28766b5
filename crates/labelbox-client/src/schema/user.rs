// crates/labelbox-client/src/schema/user.rs
// ============================================================================
// Module: User Entity
// Description: User node mapping and single-object lookup.
// Purpose: Resolve organization members by identifier.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A user is an organization member. Lookup by identifier returns
//! [`crate::ClientError::NotFound`] when the server resolves the id to null,
//! so callers can distinguish a deleted member from a transport failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::client::Execute;
use crate::error::ClientError;
use crate::pagination::FromNode;
use crate::schema::UserId;

// ============================================================================
// SECTION: User Entity
// ============================================================================

/// User node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-issued user identifier.
    pub id: UserId,
    /// Account email, when visible to the caller.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name, when set.
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Field selection requested for every user node.
    pub const QUERY_FIELDS: &'static str = "id email name";

    /// Fetches a single user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the id resolves to null, and
    /// other [`ClientError`] variants on transport or decode failures.
    pub fn get(client: &dyn Execute, id: &UserId) -> Result<Self, ClientError> {
        let query = format!(
            "query GetUserPyApi($id: ID!) {{user(where: {{id: $id}}) {{{fields}}}}}",
            fields = Self::QUERY_FIELDS
        );
        let data = client.execute(&query, json!({ "id": id.as_str() }))?;
        match data.get("user") {
            Some(node) if !node.is_null() => Self::from_node(node.clone()),
            _ => Err(ClientError::NotFound(format!("user {id}"))),
        }
    }
}
