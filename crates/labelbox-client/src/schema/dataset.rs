// crates/labelbox-client/src/schema/dataset.rs
// ============================================================================
// Module: Dataset Entity
// Description: Dataset node mapping and provisioning operations.
// Purpose: Create and delete datasets and populate them with data rows.
// Dependencies: serde, serde_json, time
// ============================================================================

//! ## Overview
//! A dataset groups data rows and optionally attaches to projects at
//! creation. Deletion is a soft delete and cascades to the contained data
//! rows server-side.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use time::OffsetDateTime;

use crate::client::Execute;
use crate::error::ClientError;
use crate::pagination::FromNode;
use crate::schema::DataRow;
use crate::schema::DatasetId;
use crate::schema::Project;
use crate::schema::take_node;

// ============================================================================
// SECTION: Dataset Entity
// ============================================================================

/// Dataset node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Server-issued dataset identifier.
    pub id: DatasetId,
    /// Dataset display name.
    pub name: String,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    /// Last-update timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}

impl Dataset {
    /// Field selection requested for every dataset node.
    pub const QUERY_FIELDS: &'static str = "id name createdAt updatedAt";

    /// Creates a dataset, optionally attached to a project.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the mutation fails or the response does
    /// not carry a dataset node.
    pub fn create(
        client: &dyn Execute,
        name: &str,
        project: Option<&Project>,
    ) -> Result<Self, ClientError> {
        let data = match project {
            Some(project) => {
                let query = format!(
                    "mutation CreateDatasetPyApi($name: String!, $projectId: ID!) \
                     {{createDataset(data: {{name: $name, projects: {{connect: [{{id: \
                     $projectId}}]}}}}) {{{fields}}}}}",
                    fields = Self::QUERY_FIELDS
                );
                client.execute(
                    &query,
                    json!({ "name": name, "projectId": project.id.as_str() }),
                )?
            }
            None => {
                let query = format!(
                    "mutation CreateDatasetPyApi($name: String!) {{createDataset(data: {{name: \
                     $name}}) {{{fields}}}}}",
                    fields = Self::QUERY_FIELDS
                );
                client.execute(&query, json!({ "name": name }))?
            }
        };
        Self::from_node(take_node(&data, "createDataset")?)
    }

    /// Soft-deletes this dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the mutation fails.
    pub fn delete(&self, client: &dyn Execute) -> Result<(), ClientError> {
        let query = "mutation DeleteDatasetPyApi($datasetId: ID!) {updateDataset(where: {id: \
                     $datasetId}, data: {deleted: true}) {id}}";
        client.execute(query, json!({ "datasetId": self.id.as_str() }))?;
        Ok(())
    }

    /// Creates a data row in this dataset.
    ///
    /// `row_data` is treated as an external URL by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the mutation fails or the response does
    /// not carry a data row node.
    pub fn create_data_row(
        &self,
        client: &dyn Execute,
        row_data: &str,
    ) -> Result<DataRow, ClientError> {
        let query = format!(
            "mutation CreateDataRowPyApi($rowData: String!, $datasetId: ID!) {{createDataRow(data: \
             {{rowData: $rowData, dataset: {{connect: {{id: $datasetId}}}}}}) {{{fields}}}}}",
            fields = DataRow::QUERY_FIELDS
        );
        let data = client.execute(
            &query,
            json!({ "rowData": row_data, "datasetId": self.id.as_str() }),
        )?;
        DataRow::from_node(take_node(&data, "createDataRow")?)
    }
}
