// crates/labelbox-testkit/src/random.rs
// ============================================================================
// Module: Random Value Generation
// Description: Random field values for fixture provisioning.
// Purpose: Give every provisioned resource a collision-free name.
// Dependencies: rand, time
// ============================================================================

//! ## Overview
//! Fixtures name their resources with random ASCII-letter strings so
//! concurrent suite runs against a shared organization do not collide.
//! Generation is typed by [`FieldKind`]; only text and timestamps are
//! supported, every other kind is an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use rand::Rng;
use time::OffsetDateTime;

use crate::error::TestkitError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Alphabet used for generated names.
const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every generated name.
pub const RAND_NAME_LEN: usize = 16;

// ============================================================================
// SECTION: Field Kinds
// ============================================================================

/// Field-type vocabulary of the schema layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text field.
    Text,
    /// Timestamp field.
    DateTime,
    /// Integer field.
    Int,
    /// Floating-point field.
    Float,
    /// Boolean field.
    Flag,
    /// Identifier field.
    Id,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::DateTime => "date-time",
            Self::Int => "int",
            Self::Float => "float",
            Self::Flag => "flag",
            Self::Id => "id",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Random Values
// ============================================================================

/// Value produced by the random generator.
#[derive(Debug, Clone, PartialEq)]
pub enum RandValue {
    /// Random ASCII-letter string.
    Text(String),
    /// Current UTC timestamp.
    DateTime(OffsetDateTime),
}

/// Generates a random ASCII-letter name.
#[must_use]
pub fn rand_name() -> String {
    let mut rng = rand::thread_rng();
    (0..RAND_NAME_LEN)
        .map(|_| {
            let index = rng.gen_range(0..ASCII_LETTERS.len());
            char::from(ASCII_LETTERS[index])
        })
        .collect()
}

/// Returns the current UTC timestamp.
#[must_use]
pub fn rand_timestamp() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Generates a random value for the given field kind.
///
/// # Errors
///
/// Returns [`TestkitError::UnsupportedFieldKind`] for any kind other than
/// [`FieldKind::Text`] and [`FieldKind::DateTime`].
pub fn rand_value(kind: FieldKind) -> Result<RandValue, TestkitError> {
    match kind {
        FieldKind::Text => Ok(RandValue::Text(rand_name())),
        FieldKind::DateTime => Ok(RandValue::DateTime(rand_timestamp())),
        unsupported => Err(TestkitError::UnsupportedFieldKind(unsupported)),
    }
}
