// crates/labelbox-testkit/src/fixtures/project.rs
// ============================================================================
// Module: Project Fixtures
// Description: Single-project and two-project fixtures.
// Purpose: Provision throwaway projects for a test and delete them after.
// Dependencies: labelbox-client
// ============================================================================

//! ## Overview
//! [`ProjectFixture`] provisions one randomly named project.
//! [`ProjectPack`] provisions the fixed `user-proj-{idx}` pair used by
//! membership tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use labelbox_client::Project;

use crate::error::TestkitError;
use crate::integration::IntegrationClient;
use crate::random::rand_name;

// ============================================================================
// SECTION: Project Fixture
// ============================================================================

/// One randomly named project, deleted on teardown.
pub struct ProjectFixture<'a> {
    /// Client the project was provisioned through.
    client: &'a IntegrationClient,
    /// Provisioned project.
    project: Project,
    /// Whether teardown already ran.
    torn_down: bool,
}

impl<'a> ProjectFixture<'a> {
    /// Provisions a project with a random name.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when project creation fails.
    pub fn new(client: &'a IntegrationClient) -> Result<Self, TestkitError> {
        let project = Project::create(client, &rand_name())?;
        Ok(Self {
            client,
            project,
            torn_down: false,
        })
    }

    /// Returns the provisioned project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Deletes the project.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when the delete fails; `Drop` retries it.
    pub fn teardown(mut self) -> Result<(), TestkitError> {
        self.project.delete(self.client)?;
        self.torn_down = true;
        Ok(())
    }
}

impl Drop for ProjectFixture<'_> {
    fn drop(&mut self) {
        if !self.torn_down {
            let _ = self.project.delete(self.client);
        }
    }
}

// ============================================================================
// SECTION: Project Pack
// ============================================================================

/// Number of projects provisioned by [`ProjectPack`].
const PACK_SIZE: usize = 2;

/// Two fixed-name projects for membership tests, deleted on teardown.
#[derive(Debug)]
pub struct ProjectPack<'a> {
    /// Client the projects were provisioned through.
    client: &'a IntegrationClient,
    /// Provisioned projects, in creation order.
    projects: Vec<Project>,
    /// Whether teardown already ran.
    torn_down: bool,
}

impl<'a> ProjectPack<'a> {
    /// Provisions the `user-proj-{idx}` projects.
    ///
    /// Projects created before a failing creation are deleted before the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when any creation fails.
    pub fn new(client: &'a IntegrationClient) -> Result<Self, TestkitError> {
        let mut projects = Vec::with_capacity(PACK_SIZE);
        for idx in 0..PACK_SIZE {
            match Project::create(client, &format!("user-proj-{idx}")) {
                Ok(project) => projects.push(project),
                Err(err) => {
                    for project in &projects {
                        let _ = project.delete(client);
                    }
                    return Err(err.into());
                }
            }
        }
        Ok(Self {
            client,
            projects,
            torn_down: false,
        })
    }

    /// Returns the provisioned projects in creation order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Deletes every project in the pack.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] on the first failing delete; `Drop` retries
    /// the remainder.
    pub fn teardown(mut self) -> Result<(), TestkitError> {
        for project in &self.projects {
            project.delete(self.client)?;
        }
        self.torn_down = true;
        Ok(())
    }
}

impl Drop for ProjectPack<'_> {
    fn drop(&mut self) {
        if !self.torn_down {
            for project in &self.projects {
                let _ = project.delete(self.client);
            }
        }
    }
}
