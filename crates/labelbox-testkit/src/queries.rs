// crates/labelbox-testkit/src/queries.rs
// ============================================================================
// Module: Invite Helper Queries
// Description: Suite-only invite operations with no public client surface.
// Purpose: Cancel and list pending invites during organization tests.
// Dependencies: labelbox-client, serde_json
// ============================================================================

//! ## Overview
//! The public client exposes no invite operations; these helpers exist only
//! so the suite can sweep and assert on pending invites. All three are
//! experimental operations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use labelbox_client::Execute;
use labelbox_client::Invite;
use labelbox_client::InviteId;
use labelbox_client::PaginatedCollection;
use labelbox_client::ProjectId;
use serde_json::Map;
use serde_json::json;

use crate::error::TestkitError;
use crate::integration::IntegrationClient;

// ============================================================================
// SECTION: Invite Helpers
// ============================================================================

/// Cancels a pending invite.
///
/// # Errors
///
/// Returns [`TestkitError`] when the mutation fails.
pub fn cancel_invite(client: &IntegrationClient, invite_id: &InviteId) -> Result<(), TestkitError> {
    let query = "mutation CancelInvitePyApi($where: WhereUniqueIdInput!) {
            cancelInvite(where: $where) {id}}";
    client.execute_experimental(query, json!({ "where": { "id": invite_id.as_str() } }))?;
    Ok(())
}

/// Lists the pending invites of one project.
#[must_use]
pub fn get_project_invites<'a>(
    client: &'a IntegrationClient,
    project_id: &ProjectId,
) -> PaginatedCollection<'a, Invite> {
    let query = format!(
        "query GetProjectInvitationsPyApi($from: ID, $first: PageSize, $projectId: ID!) {{
        project(where: {{id: $projectId}}) {{id
        invites(from: $from, first: $first) {{ nodes {{ {fields}
        projectInvites {{ projectId projectRoleName }} }} nextCursor}}}}}}",
        fields = Invite::QUERY_FIELDS
    );
    let mut variables = Map::new();
    variables.insert("projectId".to_string(), json!(project_id.as_str()));
    PaginatedCollection::cursor(
        client,
        query,
        variables,
        &["project", "invites", "nodes"],
        &["project", "invites", "nextCursor"],
    )
    .experimental()
}

/// Lists the organization's pending invites.
#[must_use]
pub fn get_invites(client: &IntegrationClient) -> PaginatedCollection<'_, Invite> {
    let query = "query GetOrgInvitationsPyApi($from: ID, $first: PageSize) {
            organization { id invites(from: $from, first: $first) {
                nodes { id createdAt organizationRoleName inviteeEmail } nextCursor }}}";
    PaginatedCollection::cursor(
        client,
        query,
        Map::new(),
        &["organization", "invites", "nodes"],
        &["organization", "invites", "nextCursor"],
    )
    .experimental()
}
