// crates/labelbox-client/tests/client/schema_tests.rs
// ============================================================================
// Module: Schema Operation Tests
// Description: Tests for entity operations and their GraphQL documents.
// ============================================================================

use labelbox_client::Client;
use labelbox_client::ClientError;
use labelbox_client::Dataset;
use labelbox_client::Organization;
use labelbox_client::Project;
use labelbox_client::Role;
use labelbox_client::User;
use labelbox_client::UserId;
use serde_json::json;

use crate::common::MockApi;
use crate::common::graphql_data;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a project node reply for creation tests.
fn project_node(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "createdAt": "2021-03-01T10:00:00Z",
        "updatedAt": "2021-03-01T10:00:00Z",
    })
}

/// Builds a dataset node reply for creation tests.
fn dataset_node(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "createdAt": null,
        "updatedAt": null,
    })
}

// ============================================================================
// SECTION: Project Tests
// ============================================================================

#[test]
fn project_create_sends_named_mutation_and_parses_node() {
    let api = MockApi::start(vec![graphql_data(
        json!({"createProject": project_node("proj1", "alpha")}),
    )]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let project = Project::create(&client, "alpha").expect("create project");

    assert_eq!(project.id.as_str(), "proj1");
    assert_eq!(project.name, "alpha");

    let requests = api.finish();
    assert!(requests[0].query().starts_with("mutation CreateProjectPyApi($name: String!)"));
    assert_eq!(requests[0].variables(), json!({"name": "alpha"}));
}

#[test]
fn project_delete_is_a_soft_delete() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "alpha")})),
        graphql_data(json!({"updateProject": {"id": "proj1"}})),
    ]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let project = Project::create(&client, "alpha").expect("create project");
    project.delete(&client).expect("delete project");

    let requests = api.finish();
    let delete = requests[1].query();
    assert!(delete.starts_with("mutation DeleteProjectPyApi"));
    assert!(delete.contains("data: {deleted: true}"));
    assert_eq!(requests[1].variables(), json!({"projectId": "proj1"}));
}

#[test]
fn project_create_label_connects_the_any_type() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "alpha")})),
        graphql_data(json!({"createDataset": dataset_node("ds1", "beta")})),
        graphql_data(json!({"createDataRow": {
            "id": "row1",
            "externalId": null,
            "rowData": "https://picsum.photos/200/300",
            "createdAt": null,
            "updatedAt": null,
        }})),
        graphql_data(json!({"createLabel": {
            "id": "lbl1",
            "label": "cat",
            "secondsToLabel": 0.0,
        }})),
    ]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let project = Project::create(&client, "alpha").expect("create project");
    let dataset = Dataset::create(&client, "beta", Some(&project)).expect("create dataset");
    let data_row = dataset
        .create_data_row(&client, "https://picsum.photos/200/300")
        .expect("create data row");
    let label = project.create_label(&client, &data_row, "cat").expect("create label");

    assert_eq!(label.id.as_str(), "lbl1");

    let requests = api.finish();
    let label_query = requests[3].query();
    assert!(label_query.starts_with("mutation CreateLabelPyApi"));
    assert!(label_query.contains("type: {connect: {name: \"Any\"}}"));
    assert_eq!(requests[3].variables()["secondsToLabel"], json!(0.0));
    assert_eq!(requests[3].variables()["dataRowId"], json!("row1"));
}

// ============================================================================
// SECTION: Dataset Tests
// ============================================================================

#[test]
fn dataset_create_connects_project_when_given() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createProject": project_node("proj1", "alpha")})),
        graphql_data(json!({"createDataset": dataset_node("ds1", "beta")})),
    ]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let project = Project::create(&client, "alpha").expect("create project");
    let dataset = Dataset::create(&client, "beta", Some(&project)).expect("create dataset");

    assert_eq!(dataset.id.as_str(), "ds1");

    let requests = api.finish();
    let query = requests[1].query();
    assert!(query.contains("projects: {connect: [{id: $projectId}]}"));
    assert_eq!(requests[1].variables()["projectId"], json!("proj1"));
}

#[test]
fn dataset_create_standalone_omits_project_connection() {
    let api = MockApi::start(vec![graphql_data(json!({"createDataset": dataset_node("ds1", "beta")}))]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    Dataset::create(&client, "beta", None).expect("create dataset");

    let requests = api.finish();
    assert!(!requests[0].query().contains("projects:"));
    assert_eq!(requests[0].variables(), json!({"name": "beta"}));
}

#[test]
fn dataset_delete_is_a_soft_delete() {
    let api = MockApi::start(vec![
        graphql_data(json!({"createDataset": dataset_node("ds1", "beta")})),
        graphql_data(json!({"updateDataset": {"id": "ds1"}})),
    ]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let dataset = Dataset::create(&client, "beta", None).expect("create dataset");
    dataset.delete(&client).expect("delete dataset");

    let requests = api.finish();
    assert!(requests[1].query().starts_with("mutation DeleteDatasetPyApi"));
    assert!(requests[1].query().contains("data: {deleted: true}"));
}

// ============================================================================
// SECTION: Organization And Role Tests
// ============================================================================

#[test]
fn organization_get_takes_no_arguments() {
    let api = MockApi::start(vec![graphql_data(
        json!({"organization": {"id": "org1", "name": "acme"}}),
    )]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let organization = Organization::get(&client).expect("organization");

    assert_eq!(organization.id.as_str(), "org1");
    let requests = api.finish();
    assert!(requests[0].query().starts_with("query GetOrganizationPyApi"));
    assert_eq!(requests[0].variables(), json!({}));
}

#[test]
fn organization_remove_user_soft_deletes_the_member() {
    let api = MockApi::start(vec![
        graphql_data(json!({"organization": {"id": "org1", "name": "acme"}})),
        graphql_data(json!({"updateUser": {"id": "usr1", "deleted": true}})),
    ]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let organization = Organization::get(&client).expect("organization");
    let user = User {
        id: UserId::new("usr1"),
        email: None,
        name: None,
    };
    organization.remove_user(&client, &user).expect("remove user");

    let requests = api.finish();
    assert!(requests[1].query().starts_with("mutation DeleteMemberPyApi"));
    assert_eq!(requests[1].variables(), json!({"id": "usr1"}));
}

#[test]
fn role_map_is_keyed_by_normalized_name() {
    let api = MockApi::start(vec![graphql_data(json!({"roles": [
        {"id": "role-none", "name": "None"},
        {"id": "role-tm", "name": "Team Manager"},
    ]}))]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let roles = Role::get_all(&client).expect("roles");

    assert_eq!(roles["NONE"].id.as_str(), "role-none");
    assert_eq!(roles["TEAM_MANAGER"].id.as_str(), "role-tm");
    api.finish();
}

// ============================================================================
// SECTION: User Tests
// ============================================================================

#[test]
fn user_get_resolves_by_identifier() {
    let api = MockApi::start(vec![graphql_data(json!({"user": {
        "id": "usr1",
        "email": "someone@labelbox.com",
        "name": "Someone",
    }}))]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let user = User::get(&client, &UserId::new("usr1")).expect("user");

    assert_eq!(user.email.as_deref(), Some("someone@labelbox.com"));
    let requests = api.finish();
    assert!(requests[0].query().starts_with("query GetUserPyApi($id: ID!)"));
}

#[test]
fn user_get_maps_null_to_not_found() {
    let api = MockApi::start(vec![graphql_data(json!({"user": null}))]);
    let client = Client::new("test-key", api.endpoint()).expect("client");

    let err = User::get(&client, &UserId::new("missing")).unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(err.to_string().contains("missing"));
    api.finish();
}
