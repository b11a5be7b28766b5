// crates/labelbox-testkit/src/fixtures/organization.rs
// ============================================================================
// Module: Organization Fixture
// Description: Organization fixture with stale-invite sweeping.
// Purpose: Hand invite tests a clean organization and leave it clean.
// Dependencies: labelbox-client
// ============================================================================

//! ## Overview
//! Invite tests create pending invites addressed to the suite's own domain;
//! an aborted run leaves them behind and blocks the next run's seats.
//! [`OrganizationFixture`] sweeps those stale invites both before and after
//! the test. The organization must keep at least one seat open for the
//! invite flows to run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use labelbox_client::Invite;
use labelbox_client::Organization;

use crate::error::TestkitError;
use crate::integration::IntegrationClient;
use crate::queries::cancel_invite;
use crate::queries::get_invites;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Invitee-address fragment marking an invite as suite-created.
const STALE_INVITE_DOMAIN: &str = "@labelbox.com";

// ============================================================================
// SECTION: Organization Fixture
// ============================================================================

/// The caller's organization, swept of stale invites on both ends.
pub struct OrganizationFixture<'a> {
    /// Client the organization was resolved through.
    client: &'a IntegrationClient,
    /// Resolved organization.
    organization: Organization,
    /// Whether teardown already ran.
    torn_down: bool,
}

impl<'a> OrganizationFixture<'a> {
    /// Resolves the organization and sweeps stale invites left by earlier
    /// runs.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when the lookup or the sweep fails.
    pub fn new(client: &'a IntegrationClient) -> Result<Self, TestkitError> {
        let organization = Organization::get(client)?;
        cancel_stale_invites(client)?;
        Ok(Self {
            client,
            organization,
            torn_down: false,
        })
    }

    /// Returns the resolved organization.
    #[must_use]
    pub const fn organization(&self) -> &Organization {
        &self.organization
    }

    /// Sweeps stale invites created during the test.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when the sweep fails; `Drop` retries it.
    pub fn teardown(mut self) -> Result<(), TestkitError> {
        cancel_stale_invites(self.client)?;
        self.torn_down = true;
        Ok(())
    }
}

impl Drop for OrganizationFixture<'_> {
    fn drop(&mut self) {
        if !self.torn_down {
            let _ = cancel_stale_invites(self.client);
        }
    }
}

// ============================================================================
// SECTION: Sweep Helper
// ============================================================================

/// Cancels every pending invite addressed to the suite's domain.
///
/// Returns how many invites were cancelled.
///
/// # Errors
///
/// Returns [`TestkitError`] when listing or cancelling fails.
pub fn cancel_stale_invites(client: &IntegrationClient) -> Result<usize, TestkitError> {
    let invites: Vec<Invite> = get_invites(client).collect::<Result<_, _>>()?;
    let mut cancelled = 0;
    for invite in invites {
        if invite.email_contains(STALE_INVITE_DOMAIN) {
            cancel_invite(client, &invite.id)?;
            cancelled += 1;
        }
    }
    Ok(cancelled)
}
