// crates/labelbox-client/src/schema/label.rs
// ============================================================================
// Module: Label Entity
// Description: Label node mapping.
// Purpose: Represent an annotation attached to a data row within a project.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A label records one annotation of a data row. The `label` payload is an
//! opaque string owned by the editor that produced it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::schema::LabelId;

// ============================================================================
// SECTION: Label Entity
// ============================================================================

/// Label node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Server-issued label identifier.
    pub id: LabelId,
    /// Annotation payload.
    #[serde(default)]
    pub label: Option<String>,
    /// Seconds spent producing the annotation.
    #[serde(default)]
    pub seconds_to_label: Option<f64>,
}

impl Label {
    /// Field selection requested for every label node.
    pub const QUERY_FIELDS: &'static str = "id label secondsToLabel";
}
