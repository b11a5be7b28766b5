// crates/labelbox-client/src/schema/organization.rs
// ============================================================================
// Module: Organization Entity
// Description: Organization node mapping and membership operations.
// Purpose: Resolve the caller's organization and remove members from it.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every API key belongs to exactly one organization, so the lookup takes no
//! arguments. Member removal is a soft delete of the user node.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::client::Execute;
use crate::error::ClientError;
use crate::pagination::FromNode;
use crate::schema::OrganizationId;
use crate::schema::User;
use crate::schema::take_node;

// ============================================================================
// SECTION: Organization Entity
// ============================================================================

/// Organization node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Server-issued organization identifier.
    pub id: OrganizationId,
    /// Organization display name, when set.
    #[serde(default)]
    pub name: Option<String>,
}

impl Organization {
    /// Field selection requested for every organization node.
    pub const QUERY_FIELDS: &'static str = "id name";

    /// Fetches the organization the API key belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the query fails or the response does not
    /// carry an organization node.
    pub fn get(client: &dyn Execute) -> Result<Self, ClientError> {
        let query = format!(
            "query GetOrganizationPyApi {{organization {{{fields}}}}}",
            fields = Self::QUERY_FIELDS
        );
        let data = client.execute(&query, json!({}))?;
        Self::from_node(take_node(&data, "organization")?)
    }

    /// Removes a member from this organization.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the mutation fails.
    pub fn remove_user(&self, client: &dyn Execute, user: &User) -> Result<(), ClientError> {
        let query = "mutation DeleteMemberPyApi($id: ID!) {updateUser(where: {id: $id}, data: \
                     {deleted: true}) {id deleted}}";
        client.execute(query, json!({ "id": user.id.as_str() }))?;
        Ok(())
    }
}
