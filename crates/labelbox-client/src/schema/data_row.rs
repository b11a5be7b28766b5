// crates/labelbox-client/src/schema/data_row.rs
// ============================================================================
// Module: Data Row Entity
// Description: Data row node mapping.
// Purpose: Represent a single piece of labelable content.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! A data row is one unit of content within a dataset (an image, a video, a
//! text document). Row data pointing at an external URL is stored as-is.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::schema::DataRowId;

// ============================================================================
// SECTION: Data Row Entity
// ============================================================================

/// Data row node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRow {
    /// Server-issued data row identifier.
    pub id: DataRowId,
    /// User-supplied external identifier, when present.
    #[serde(default)]
    pub external_id: Option<String>,
    /// Content location or inline content.
    pub row_data: String,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    /// Last-update timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}

impl DataRow {
    /// Field selection requested for every data row node.
    pub const QUERY_FIELDS: &'static str = "id externalId rowData createdAt updatedAt";
}
