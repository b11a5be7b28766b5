// crates/labelbox-testkit/src/fixtures/user.rs
// ============================================================================
// Module: Project-Based User Fixture
// Description: Throwaway organization member with no organization role.
// Purpose: Provision a user that only project roles can grant access to.
// Dependencies: labelbox-client, serde_json
// ============================================================================

//! ## Overview
//! [`ProjectBasedUserFixture`] provisions a member through the old
//! membership mutation, which does not require the invitee to accept an
//! email invite. The member gets the `NONE` organization role so tests can
//! grant access purely through project roles. Teardown removes the member.

// ============================================================================
// SECTION: Imports
// ============================================================================

use labelbox_client::Execute;
use labelbox_client::Organization;
use labelbox_client::Role;
use labelbox_client::User;
use labelbox_client::UserId;
use serde_json::Value;
use serde_json::json;

use crate::error::TestkitError;
use crate::integration::IntegrationClient;
use crate::random::rand_name;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Organization role granted to provisioned members.
const MEMBER_ROLE: &str = "NONE";

/// Domain the generated member addresses belong to.
const MEMBER_DOMAIN: &str = "labelbox.com";

// ============================================================================
// SECTION: Project-Based User Fixture
// ============================================================================

/// One throwaway member with the `NONE` organization role.
#[derive(Debug)]
pub struct ProjectBasedUserFixture<'a> {
    /// Client the member was provisioned through.
    client: &'a IntegrationClient,
    /// Provisioned member.
    user: User,
    /// Whether teardown already ran.
    torn_down: bool,
}

impl<'a> ProjectBasedUserFixture<'a> {
    /// Provisions a member with a random address and the `NONE` role.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError::MissingRole`] when the organization exposes
    /// no `NONE` role, [`TestkitError::UserNotCreated`] when the mutation
    /// reports no new user id, and other variants when a call fails.
    pub fn new(client: &'a IntegrationClient) -> Result<Self, TestkitError> {
        let email = rand_name();
        let roles = Role::get_all(client)?;
        let role = roles
            .get(MEMBER_ROLE)
            .ok_or_else(|| TestkitError::MissingRole(MEMBER_ROLE.to_string()))?;

        let query = format!(
            "mutation MakeNewUserPyApi {{
        addMembersToOrganization(
            data: {{
                emails: [\"{email}@{MEMBER_DOMAIN}\"],
                orgRoleId: \"{role_id}\",
                projectRoles: []
            }}
        ) {{
        newUserId
        }}
    }}",
            role_id = role.id
        );
        let data = client.execute(&query, json!({}))?;
        let user_id = data
            .get("addMembersToOrganization")
            .and_then(Value::as_array)
            .and_then(|entries| entries.first())
            .and_then(|entry| entry.get("newUserId"))
            .and_then(Value::as_str)
            .ok_or(TestkitError::UserNotCreated)?;
        let user = User::get(client, &UserId::new(user_id))?;
        Ok(Self {
            client,
            user,
            torn_down: false,
        })
    }

    /// Returns the provisioned member.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Removes the member from the organization.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError`] when the removal fails; `Drop` retries it.
    pub fn teardown(mut self) -> Result<(), TestkitError> {
        let organization = Organization::get(self.client)?;
        organization.remove_user(self.client, &self.user)?;
        self.torn_down = true;
        Ok(())
    }
}

impl Drop for ProjectBasedUserFixture<'_> {
    fn drop(&mut self) {
        if !self.torn_down {
            if let Ok(organization) = Organization::get(self.client) {
                let _ = organization.remove_user(self.client, &self.user);
            }
        }
    }
}
