// crates/labelbox-testkit/src/fixtures/label_pack.rs
// ============================================================================
// Module: Label Pack Fixture
// Description: Project, dataset, data row, and label provisioned together.
// Purpose: Give labeling tests a fully wired annotation in one step.
// Dependencies: labelbox-client
// ============================================================================

//! ## Overview
//! [`LabelPack`] provisions the full labeling chain: a project, a dataset
//! attached to it, a data row pointing at [`IMG_URL`], and a label on that
//! row. Construction failures delete whatever was already provisioned before
//! returning the error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use labelbox_client::DataRow;
use labelbox_client::Dataset;
use labelbox_client::Label;
use labelbox_client::Project;

use crate::environ::IMG_URL;
use crate::error::TestkitError;
use crate::integration::IntegrationClient;
use crate::random::rand_name;

// ============================================================================
// SECTION: Label Pack
// ============================================================================

/// Project, dataset, data row, and label provisioned as one unit.
#[derive(Debug)]
pub struct LabelPack<'a> {
    /// Client the resources were provisioned through.
    client: &'a IntegrationClient,
    /// Provisioned project.
    project: Project,
    /// Dataset attached to the project.
    dataset: Dataset,
    /// Data row pointing at the sample image.
    data_row: DataRow,
    /// Label created on the data row.
    label: Label,
    /// Whether teardown already ran.
    torn_down: bool,
}

impl<'a> LabelPack<'a> {
    /// Provisions the full labeling chain.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when any step fails; already-provisioned
    /// resources are deleted first.
    pub fn new(client: &'a IntegrationClient) -> Result<Self, TestkitError> {
        let project = Project::create(client, &rand_name())?;
        match Self::provision_contents(client, &project) {
            Ok((dataset, data_row, label)) => Ok(Self {
                client,
                project,
                dataset,
                data_row,
                label,
                torn_down: false,
            }),
            Err(err) => {
                let _ = project.delete(client);
                Err(err)
            }
        }
    }

    /// Provisions the dataset, data row, and label under `project`.
    fn provision_contents(
        client: &IntegrationClient,
        project: &Project,
    ) -> Result<(Dataset, DataRow, Label), TestkitError> {
        let dataset = Dataset::create(client, &rand_name(), Some(project))?;
        match Self::provision_label(client, project, &dataset) {
            Ok((data_row, label)) => Ok((dataset, data_row, label)),
            Err(err) => {
                let _ = dataset.delete(client);
                Err(err)
            }
        }
    }

    /// Provisions the data row and label within `dataset`.
    fn provision_label(
        client: &IntegrationClient,
        project: &Project,
        dataset: &Dataset,
    ) -> Result<(DataRow, Label), TestkitError> {
        let data_row = dataset.create_data_row(client, IMG_URL)?;
        let label = project.create_label(client, &data_row, &rand_name())?;
        Ok((data_row, label))
    }

    /// Returns the provisioned project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the provisioned dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the provisioned data row.
    #[must_use]
    pub const fn data_row(&self) -> &DataRow {
        &self.data_row
    }

    /// Returns the provisioned label.
    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.label
    }

    /// Deletes the dataset, then the project.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] on the first failing delete; `Drop` retries
    /// the remainder.
    pub fn teardown(mut self) -> Result<(), TestkitError> {
        self.dataset.delete(self.client)?;
        self.project.delete(self.client)?;
        self.torn_down = true;
        Ok(())
    }
}

impl Drop for LabelPack<'_> {
    fn drop(&mut self) {
        if !self.torn_down {
            let _ = self.dataset.delete(self.client);
            let _ = self.project.delete(self.client);
        }
    }
}
