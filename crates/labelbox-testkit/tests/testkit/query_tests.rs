// crates/labelbox-testkit/tests/testkit/query_tests.rs
// ============================================================================
// Module: Invite Helper Query Tests
// Description: Tests for the suite-only invite operations.
// ============================================================================

use labelbox_client::Invite;
use labelbox_client::InviteId;
use labelbox_client::ProjectId;
use labelbox_testkit::cancel_invite;
use labelbox_testkit::get_invites;
use labelbox_testkit::get_project_invites;
use serde_json::Value;
use serde_json::json;

use crate::common::MockApi;
use crate::common::graphql_data;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds one invite node for a scripted page.
fn invite_node(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "2021-03-01T10:00:00Z",
        "organizationRoleName": "Labeler",
        "inviteeEmail": email,
    })
}

// ============================================================================
// SECTION: Cancel Invite Tests
// ============================================================================

#[test]
fn cancel_invite_sends_the_cancel_mutation() {
    let api = MockApi::start(vec![graphql_data(json!({"cancelInvite": {"id": "inv1"}}))]);
    let client = api.client();

    cancel_invite(&client, &InviteId::new("inv1")).expect("cancel invite");

    let requests = api.finish();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].query().starts_with("mutation CancelInvitePyApi($where: WhereUniqueIdInput!)"));
    assert_eq!(requests[0].variables(), json!({"where": {"id": "inv1"}}));
}

// ============================================================================
// SECTION: Organization Invite Listing Tests
// ============================================================================

#[test]
fn get_invites_walks_cursor_pages() {
    let api = MockApi::start(vec![
        graphql_data(json!({"organization": {"id": "org1", "invites": {
            "nodes": [invite_node("inv1", "a@labelbox.com")],
            "nextCursor": "c1",
        }}})),
        graphql_data(json!({"organization": {"id": "org1", "invites": {
            "nodes": [invite_node("inv2", "b@example.com")],
            "nextCursor": null,
        }}})),
    ]);
    let client = api.client();

    let invites: Vec<Invite> =
        get_invites(&client).collect::<Result<_, _>>().expect("invite pages");

    assert_eq!(invites.len(), 2);
    assert_eq!(invites[0].id.as_str(), "inv1");
    assert_eq!(invites[1].invitee_email.as_deref(), Some("b@example.com"));

    let requests = api.finish();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].query().starts_with("query GetOrgInvitationsPyApi($from: ID, $first: PageSize)"));
    assert!(requests[0].variables().get("from").is_none());
    assert_eq!(requests[1].variables()["from"], json!("c1"));
}

// ============================================================================
// SECTION: Project Invite Listing Tests
// ============================================================================

#[test]
fn get_project_invites_scopes_to_the_project() {
    let mut node = invite_node("inv1", "a@labelbox.com");
    node["projectInvites"] = json!([
        {"projectId": "proj1", "projectRoleName": "Labeler"},
    ]);
    let api = MockApi::start(vec![graphql_data(json!({"project": {"id": "proj1", "invites": {
        "nodes": [node],
        "nextCursor": null,
    }}}))]);
    let client = api.client();

    let invites: Vec<Invite> = get_project_invites(&client, &ProjectId::new("proj1"))
        .collect::<Result<_, _>>()
        .expect("project invites");

    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0].project_invites.len(), 1);
    assert_eq!(invites[0].project_invites[0].project_id.as_str(), "proj1");

    let requests = api.finish();
    assert!(requests[0].query().starts_with(
        "query GetProjectInvitationsPyApi($from: ID, $first: PageSize, $projectId: ID!)"
    ));
    assert_eq!(requests[0].variables()["projectId"], json!("proj1"));
}
