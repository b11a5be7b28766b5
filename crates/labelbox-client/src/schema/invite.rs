// crates/labelbox-client/src/schema/invite.rs
// ============================================================================
// Module: Invite Entity
// Description: Invite node mapping.
// Purpose: Represent pending organization and project membership grants.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! An invite is a pending membership grant. Organization-level listings carry
//! the role and invitee email; project-level listings additionally carry the
//! per-project role grants.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::schema::InviteId;
use crate::schema::ProjectId;

// ============================================================================
// SECTION: Invite Entity
// ============================================================================

/// Pending membership invite node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    /// Server-issued invite identifier.
    pub id: InviteId,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    /// Organization role granted on acceptance.
    #[serde(default)]
    pub organization_role_name: Option<String>,
    /// Email address the invite was sent to.
    #[serde(default)]
    pub invitee_email: Option<String>,
    /// Per-project role grants, when the listing selects them.
    #[serde(default)]
    pub project_invites: Vec<ProjectInvite>,
}

impl Invite {
    /// Field selection requested for every invite node.
    pub const QUERY_FIELDS: &'static str = "id createdAt organizationRoleName inviteeEmail";

    /// Returns whether the invite was sent to an address containing `needle`.
    #[must_use]
    pub fn email_contains(&self, needle: &str) -> bool {
        self.invitee_email.as_deref().is_some_and(|email| email.contains(needle))
    }
}

// ============================================================================
// SECTION: Project Invite Entity
// ============================================================================

/// Per-project role grant carried by a project-level invite listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInvite {
    /// Project the role is granted on.
    pub project_id: ProjectId,
    /// Role granted within the project.
    pub project_role_name: String,
}
