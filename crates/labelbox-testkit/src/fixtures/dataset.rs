// crates/labelbox-testkit/src/fixtures/dataset.rs
// ============================================================================
// Module: Dataset Fixture
// Description: Single-dataset fixture.
// Purpose: Provision a throwaway dataset for a test and delete it after.
// Dependencies: labelbox-client
// ============================================================================

//! ## Overview
//! [`DatasetFixture`] provisions one randomly named, unattached dataset.

// ============================================================================
// SECTION: Imports
// ============================================================================

use labelbox_client::Dataset;

use crate::error::TestkitError;
use crate::integration::IntegrationClient;
use crate::random::rand_name;

// ============================================================================
// SECTION: Dataset Fixture
// ============================================================================

/// One randomly named dataset, deleted on teardown.
pub struct DatasetFixture<'a> {
    /// Client the dataset was provisioned through.
    client: &'a IntegrationClient,
    /// Provisioned dataset.
    dataset: Dataset,
    /// Whether teardown already ran.
    torn_down: bool,
}

impl<'a> DatasetFixture<'a> {
    /// Provisions a dataset with a random name.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when dataset creation fails.
    pub fn new(client: &'a IntegrationClient) -> Result<Self, TestkitError> {
        let dataset = Dataset::create(client, &rand_name(), None)?;
        Ok(Self {
            client,
            dataset,
            torn_down: false,
        })
    }

    /// Returns the provisioned dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Deletes the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when the delete fails; `Drop` retries it.
    pub fn teardown(mut self) -> Result<(), TestkitError> {
        self.dataset.delete(self.client)?;
        self.torn_down = true;
        Ok(())
    }
}

impl Drop for DatasetFixture<'_> {
    fn drop(&mut self) {
        if !self.torn_down {
            let _ = self.dataset.delete(self.client);
        }
    }
}
