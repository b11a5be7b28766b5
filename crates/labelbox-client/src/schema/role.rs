// crates/labelbox-client/src/schema/role.rs
// ============================================================================
// Module: Role Entity
// Description: Role node mapping and role-map lookup.
// Purpose: Resolve the organization's available user roles by name.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Roles are server-defined; the lookup returns a map keyed by the
//! normalized role name (uppercased, spaces replaced by underscores, e.g.
//! `NONE`, `LABELER`, `TEAM_MANAGER`) so unknown roles stay addressable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::client::Execute;
use crate::error::ClientError;
use crate::pagination::FromNode;
use crate::schema::RoleId;

// ============================================================================
// SECTION: Role Entity
// ============================================================================

/// User role node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Server-issued role identifier.
    pub id: RoleId,
    /// Role name as reported by the server.
    pub name: String,
}

impl Role {
    /// Field selection requested for every role node.
    pub const QUERY_FIELDS: &'static str = "id name";

    /// Fetches all available roles, keyed by normalized name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the query fails or the response does not
    /// carry a role array.
    pub fn get_all(client: &dyn Execute) -> Result<BTreeMap<String, Self>, ClientError> {
        let query = format!(
            "query GetAvailableUserRolesPyApi {{roles {{{fields}}}}}",
            fields = Self::QUERY_FIELDS
        );
        let data = client.execute(&query, json!({}))?;
        let nodes = data
            .get("roles")
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| {
                ClientError::JsonParse("response carries no `roles` array".to_string())
            })?;
        let mut roles = BTreeMap::new();
        for node in nodes {
            let role = Self::from_node(node)?;
            let key = role.name.to_uppercase().replace(' ', "_");
            roles.insert(key, role);
        }
        Ok(roles)
    }
}
