// crates/labelbox-client/src/schema/project.rs
// ============================================================================
// Module: Project Entity
// Description: Project node mapping and provisioning operations.
// Purpose: Create, delete, and label within labeling projects.
// Dependencies: serde, serde_json, time
// ============================================================================

//! ## Overview
//! A project is the container for a labeling effort: datasets attach to it,
//! labels are created within it. Deletion is a soft delete; deleted projects
//! stop appearing in listings but their id stays resolvable server-side.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::json;
use time::OffsetDateTime;

use crate::client::Execute;
use crate::error::ClientError;
use crate::pagination::FromNode;
use crate::pagination::PaginatedCollection;
use crate::schema::DataRow;
use crate::schema::Label;
use crate::schema::ProjectId;
use crate::schema::take_node;

// ============================================================================
// SECTION: Project Entity
// ============================================================================

/// Labeling project node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-issued project identifier.
    pub id: ProjectId,
    /// Project display name.
    pub name: String,
    /// Optional project description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    /// Last-update timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}

impl Project {
    /// Field selection requested for every project node.
    pub const QUERY_FIELDS: &'static str = "id name description createdAt updatedAt";

    /// Creates a project with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the mutation fails or the response does
    /// not carry a project node.
    pub fn create(client: &dyn Execute, name: &str) -> Result<Self, ClientError> {
        let query = format!(
            "mutation CreateProjectPyApi($name: String!) {{createProject(data: {{name: $name}}) \
             {{{fields}}}}}",
            fields = Self::QUERY_FIELDS
        );
        let data = client.execute(&query, json!({ "name": name }))?;
        Self::from_node(take_node(&data, "createProject")?)
    }

    /// Soft-deletes this project.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the mutation fails.
    pub fn delete(&self, client: &dyn Execute) -> Result<(), ClientError> {
        let query = "mutation DeleteProjectPyApi($projectId: ID!) {updateProject(where: {id: \
                     $projectId}, data: {deleted: true}) {id}}";
        client.execute(query, json!({ "projectId": self.id.as_str() }))?;
        Ok(())
    }

    /// Creates a label on this project for the given data row.
    ///
    /// Labels are a legacy-editor surface and must connect to the `Any` type
    /// at creation. `secondsToLabel` is reported as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the mutation fails or the response does
    /// not carry a label node.
    pub fn create_label(
        &self,
        client: &dyn Execute,
        data_row: &DataRow,
        label: &str,
    ) -> Result<Label, ClientError> {
        let query = format!(
            "mutation CreateLabelPyApi($label: String!, $secondsToLabel: Float!, $projectId: \
             ID!, $dataRowId: ID!) {{createLabel(data: {{type: {{connect: {{name: \"Any\"}}}} \
             label: $label, secondsToLabel: $secondsToLabel, project: {{connect: {{id: \
             $projectId}}}}, dataRow: {{connect: {{id: $dataRowId}}}}}}) {{{fields}}}}}",
            fields = Label::QUERY_FIELDS
        );
        let variables = json!({
            "label": label,
            "secondsToLabel": 0.0,
            "projectId": self.id.as_str(),
            "dataRowId": data_row.id.as_str(),
        });
        let data = client.execute(&query, variables)?;
        Label::from_node(take_node(&data, "createLabel")?)
    }

    /// Lists every label in this project.
    #[must_use]
    pub fn labels<'a>(&self, client: &'a dyn Execute) -> PaginatedCollection<'a, Label> {
        let query = format!(
            "query GetProjectLabelsPyApi($projectId: ID!) {{project (where: {{id: $projectId}}) \
             {{labels (skip: %d first: %d) {{{fields}}}}}}}",
            fields = Label::QUERY_FIELDS
        );
        let mut variables = Map::new();
        variables.insert("projectId".to_string(), json!(self.id.as_str()));
        PaginatedCollection::offset(client, query, variables, &["project", "labels"])
    }
}
