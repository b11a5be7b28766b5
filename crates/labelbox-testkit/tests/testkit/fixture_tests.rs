// crates/labelbox-testkit/tests/testkit/fixture_tests.rs
// ============================================================================
// Module: Fixture Lifecycle Tests
// Description: Tests for fixture provisioning, teardown, and drop backstops.
// ============================================================================

use labelbox_testkit::DatasetFixture;
use labelbox_testkit::IMG_URL;
use labelbox_testkit::LabelPack;
use labelbox_testkit::OrganizationFixture;
use labelbox_testkit::ProjectBasedUserFixture;
use labelbox_testkit::ProjectFixture;
use labelbox_testkit::ProjectPack;
use labelbox_testkit::TestkitError;
use serde_json::Value;
use serde_json::json;

use crate::common::MockApi;
use crate::common::MockReply;
use crate::common::graphql_data;
use crate::common::graphql_errors;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a project node reply.
fn project_node(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "createdAt": null,
        "updatedAt": null,
    })
}

/// Builds a dataset node reply.
fn dataset_node(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "createdAt": null,
        "updatedAt": null,
    })
}

/// Builds a data row node reply pointing at the sample image.
fn data_row_node(id: &str) -> Value {
    json!({
        "id": id,
        "externalId": null,
        "rowData": IMG_URL,
        "createdAt": null,
        "updatedAt": null,
    })
}

/// Builds an organization invite page reply.
fn invite_page(nodes: Value) -> MockReply {
    graphql_data(json!({"organization": {"id": "org1", "invites": {
        "nodes": nodes,
        "nextCursor": null,
    }}}))
}

// ============================================================================
// SECTION: Project Fixture Tests
// ============================================================================

#[test]
fn project_fixture_provisions_and_tears_down() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "ephemeral")})),
        graphql_data(json!({"updateProject": {"id": "proj1"}})),
    ]);
    let client = api.client();

    let fixture = ProjectFixture::new(&client).expect("project fixture");
    assert_eq!(fixture.project().id.as_str(), "proj1");
    fixture.teardown().expect("teardown");

    let requests = api.finish();
    assert_eq!(requests.len(), 2);
    let name = requests[0].variables()["name"].as_str().map(str::to_string).unwrap_or_default();
    assert_eq!(name.len(), 16);
    assert!(requests[1].query().starts_with("mutation DeleteProjectPyApi"));
    assert_eq!(requests[1].variables(), json!({"projectId": "proj1"}));
}

#[test]
fn project_fixture_drop_backstop_deletes_the_project() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "ephemeral")})),
        graphql_data(json!({"updateProject": {"id": "proj1"}})),
    ]);
    let client = api.client();

    {
        let _fixture = ProjectFixture::new(&client).expect("project fixture");
        // Dropped without an explicit teardown, as a panicking test would.
    }

    let requests = api.finish();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].query().starts_with("mutation DeleteProjectPyApi"));
}

// ============================================================================
// SECTION: Dataset Fixture Tests
// ============================================================================

#[test]
fn dataset_fixture_provisions_and_tears_down() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createDataset": dataset_node("ds1", "ephemeral")})),
        graphql_data(json!({"updateDataset": {"id": "ds1"}})),
    ]);
    let client = api.client();

    let fixture = DatasetFixture::new(&client).expect("dataset fixture");
    assert_eq!(fixture.dataset().id.as_str(), "ds1");
    fixture.teardown().expect("teardown");

    let requests = api.finish();
    assert_eq!(requests.len(), 2);
    assert!(!requests[0].query().contains("projects:"));
    assert!(requests[1].query().starts_with("mutation DeleteDatasetPyApi"));
}

// ============================================================================
// SECTION: Label Pack Tests
// ============================================================================

#[test]
fn label_pack_provisions_the_full_chain() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "ephemeral")})),
        graphql_data(json!({"createDataset": dataset_node("ds1", "ephemeral")})),
        graphql_data(json!({"createDataRow": data_row_node("row1")})),
        graphql_data(json!({"createLabel": {"id": "lbl1", "label": "x", "secondsToLabel": 0.0}})),
        graphql_data(json!({"updateDataset": {"id": "ds1"}})),
        graphql_data(json!({"updateProject": {"id": "proj1"}})),
    ]);
    let client = api.client();

    let pack = LabelPack::new(&client).expect("label pack");
    assert_eq!(pack.project().id.as_str(), "proj1");
    assert_eq!(pack.dataset().id.as_str(), "ds1");
    assert_eq!(pack.data_row().row_data, IMG_URL);
    assert_eq!(pack.label().id.as_str(), "lbl1");
    pack.teardown().expect("teardown");

    let requests = api.finish();
    assert_eq!(requests.len(), 6);
    assert!(requests[1].query().contains("projects: {connect: [{id: $projectId}]}"));
    assert_eq!(requests[2].variables()["rowData"], json!(IMG_URL));
    assert!(requests[4].query().starts_with("mutation DeleteDatasetPyApi"));
    assert!(requests[5].query().starts_with("mutation DeleteProjectPyApi"));
}

#[test]
fn label_pack_cleans_up_after_partial_provisioning() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "ephemeral")})),
        graphql_errors("dataset quota exceeded"),
        graphql_data(json!({"updateProject": {"id": "proj1"}})),
    ]);
    let client = api.client();

    let err = LabelPack::new(&client).unwrap_err();
    assert!(matches!(err, TestkitError::Client(_)));

    let requests = api.finish();
    assert_eq!(requests.len(), 3);
    assert!(requests[2].query().starts_with("mutation DeleteProjectPyApi"));
}

// ============================================================================
// SECTION: Organization Fixture Tests
// ============================================================================

#[test]
fn organization_fixture_sweeps_stale_invites_on_both_ends() {
    let stale = json!({
        "id": "inv-stale",
        "createdAt": null,
        "organizationRoleName": "Labeler",
        "inviteeEmail": "leftover@labelbox.com",
    });
    let external = json!({
        "id": "inv-keep",
        "createdAt": null,
        "organizationRoleName": "Labeler",
        "inviteeEmail": "customer@example.com",
    });
    let api = MockApi::start(vec![
        graphql_data(json!({"organization": {"id": "org1", "name": "acme"}})),
        invite_page(json!([stale, external])),
        graphql_data(json!({"cancelInvite": {"id": "inv-stale"}})),
        invite_page(json!([])),
    ]);
    let client = api.client();

    let fixture = OrganizationFixture::new(&client).expect("organization fixture");
    assert_eq!(fixture.organization().id.as_str(), "org1");
    fixture.teardown().expect("teardown");

    let requests = api.finish();
    assert_eq!(requests.len(), 4);
    assert!(requests[2].query().starts_with("mutation CancelInvitePyApi"));
    assert_eq!(requests[2].variables(), json!({"where": {"id": "inv-stale"}}));
    assert!(requests[3].query().starts_with("query GetOrgInvitationsPyApi"));
}

// ============================================================================
// SECTION: Project-Based User Tests
// ============================================================================

#[test]
fn project_based_user_provisions_with_the_none_role() {
    let api = MockApi::start(vec![
        graphql_data(json!({"roles": [
            {"id": "role-none", "name": "None"},
            {"id": "role-admin", "name": "Admin"},
        ]})),
        graphql_data(json!({"addMembersToOrganization": [{"newUserId": "usr1"}]})),
        graphql_data(json!({"user": {"id": "usr1", "email": "x@labelbox.com", "name": null}})),
        graphql_data(json!({"organization": {"id": "org1", "name": "acme"}})),
        graphql_data(json!({"updateUser": {"id": "usr1", "deleted": true}})),
    ]);
    let client = api.client();

    let fixture = ProjectBasedUserFixture::new(&client).expect("user fixture");
    assert_eq!(fixture.user().id.as_str(), "usr1");
    fixture.teardown().expect("teardown");

    let requests = api.finish();
    assert_eq!(requests.len(), 5);
    let mutation = requests[1].query();
    assert!(mutation.starts_with("mutation MakeNewUserPyApi"));
    assert!(mutation.contains("orgRoleId: \"role-none\""));
    assert!(mutation.contains("@labelbox.com"));
    assert!(requests[4].query().starts_with("mutation DeleteMemberPyApi"));
    assert_eq!(requests[4].variables(), json!({"id": "usr1"}));
}

#[test]
fn project_based_user_requires_a_new_user_id() {
    let api = MockApi::start(vec![
        graphql_data(json!({"roles": [{"id": "role-none", "name": "None"}]})),
        graphql_data(json!({"addMembersToOrganization": [{"newUserId": null}]})),
    ]);
    let client = api.client();

    let err = ProjectBasedUserFixture::new(&client).unwrap_err();

    assert!(matches!(err, TestkitError::UserNotCreated));
    assert_eq!(api.finish().len(), 2);
}

#[test]
fn project_based_user_requires_the_none_role() {
    let api = MockApi::start(vec![graphql_data(json!({"roles": [
        {"id": "role-admin", "name": "Admin"},
    ]}))]);
    let client = api.client();

    let err = ProjectBasedUserFixture::new(&client).unwrap_err();

    assert!(matches!(err, TestkitError::MissingRole(_)));
    assert!(err.to_string().contains("NONE"));
    assert_eq!(api.finish().len(), 1);
}

// ============================================================================
// SECTION: Project Pack Tests
// ============================================================================

#[test]
fn project_pack_provisions_the_fixed_name_pair() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "user-proj-0")})),
        graphql_data(json!({"createProject": project_node("proj2", "user-proj-1")})),
        graphql_data(json!({"updateProject": {"id": "proj1"}})),
        graphql_data(json!({"updateProject": {"id": "proj2"}})),
    ]);
    let client = api.client();

    let pack = ProjectPack::new(&client).expect("project pack");
    assert_eq!(pack.projects().len(), 2);
    assert_eq!(pack.projects()[0].name, "user-proj-0");
    pack.teardown().expect("teardown");

    let requests = api.finish();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].variables(), json!({"name": "user-proj-0"}));
    assert_eq!(requests[1].variables(), json!({"name": "user-proj-1"}));
    assert_eq!(requests[2].variables(), json!({"projectId": "proj1"}));
    assert_eq!(requests[3].variables(), json!({"projectId": "proj2"}));
}

#[test]
fn project_pack_cleans_up_after_partial_provisioning() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "user-proj-0")})),
        graphql_errors("project quota exceeded"),
        graphql_data(json!({"updateProject": {"id": "proj1"}})),
    ]);
    let client = api.client();

    let err = ProjectPack::new(&client).unwrap_err();
    assert!(matches!(err, TestkitError::Client(_)));

    let requests = api.finish();
    assert_eq!(requests.len(), 3);
    assert!(requests[2].query().starts_with("mutation DeleteProjectPyApi"));
}
