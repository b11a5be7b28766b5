// crates/labelbox-testkit/src/environ.rs
// ============================================================================
// Module: Test Environment Selection
// Description: Endpoint and credential resolution for the integration suite.
// Purpose: Pick the prod or staging deployment from process environment.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The suite runs against one of two deployments, selected by
//! `LABELBOX_TEST_ENVIRON`. Endpoint URLs and the editor iframe URL are
//! fixed per deployment; the API key comes from a deployment-specific
//! variable. Missing or unrecognized values are errors, not defaults.
//!
//! Every resolver has a `*_with` form taking an explicit lookup closure so
//! tests exercise resolution without mutating the process environment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Variable selecting the deployment under test (`prod` or `staging`).
pub const ENVIRON_VAR: &str = "LABELBOX_TEST_ENVIRON";

/// Variable holding the production API key.
pub const PROD_API_KEY_VAR: &str = "LABELBOX_TEST_API_KEY_PROD";

/// Variable holding the staging API key.
pub const STAGING_API_KEY_VAR: &str = "LABELBOX_TEST_API_KEY_STAGING";

/// External image URL used as data row content.
pub const IMG_URL: &str = "https://picsum.photos/200/300";

/// Checked-in sample video consumed by media tests.
const SAMPLE_VIDEO_PATH: &str = "tests/integration/media/cat.mp4";

// ============================================================================
// SECTION: Environment Errors
// ============================================================================

/// Errors raised while resolving the test environment.
#[derive(Debug, Error)]
pub enum EnvironError {
    /// Required environment variable is absent.
    #[error("missing environment variable: {name}")]
    MissingVar {
        /// Name of the absent variable.
        name: String,
    },
    /// `LABELBOX_TEST_ENVIRON` holds an unrecognized value.
    #[error("unrecognized test environment: {value}")]
    InvalidEnviron {
        /// Value that failed to parse.
        value: String,
    },
    /// Sample video file is absent from the working tree.
    #[error("sample video not found at {path}")]
    MissingVideo {
        /// Path that was checked.
        path: String,
    },
}

// ============================================================================
// SECTION: Environment Selection
// ============================================================================

/// Deployment the integration suite runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environ {
    /// Production deployment.
    Prod,
    /// Staging deployment.
    Staging,
}

impl Environ {
    /// Resolves the deployment from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironError`] when `LABELBOX_TEST_ENVIRON` is absent or
    /// holds an unrecognized value.
    pub fn from_env() -> Result<Self, EnvironError> {
        Self::resolve(env_lookup)
    }

    /// Resolves the deployment through an explicit lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironError`] when the variable is absent or holds an
    /// unrecognized value.
    pub fn resolve<F>(lookup: F) -> Result<Self, EnvironError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(ENVIRON_VAR).ok_or_else(|| EnvironError::MissingVar {
            name: ENVIRON_VAR.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Parses a deployment name.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironError::InvalidEnviron`] for anything other than
    /// `prod` or `staging`.
    pub fn from_value(value: &str) -> Result<Self, EnvironError> {
        match value {
            "prod" => Ok(Self::Prod),
            "staging" => Ok(Self::Staging),
            other => Err(EnvironError::InvalidEnviron {
                value: other.to_string(),
            }),
        }
    }

    /// Returns the deployment name on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Staging => "staging",
        }
    }

    /// Returns the GraphQL endpoint of this deployment.
    #[must_use]
    pub const fn graphql_url(self) -> &'static str {
        match self {
            Self::Prod => "https://api.labelbox.com/graphql",
            Self::Staging => "https://staging-api.labelbox.com/graphql",
        }
    }

    /// Returns the editor iframe URL of this deployment.
    #[must_use]
    pub const fn iframe_url(self) -> &'static str {
        match self {
            Self::Prod => "https://editor.labelbox.com",
            Self::Staging => "https://staging.labelbox.dev/editor",
        }
    }

    /// Returns the name of the variable holding this deployment's API key.
    #[must_use]
    pub const fn api_key_var(self) -> &'static str {
        match self {
            Self::Prod => PROD_API_KEY_VAR,
            Self::Staging => STAGING_API_KEY_VAR,
        }
    }

    /// Resolves the API key from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironError::MissingVar`] when the key variable is absent.
    pub fn testing_api_key(self) -> Result<String, EnvironError> {
        self.api_key_with(env_lookup)
    }

    /// Resolves the API key through an explicit lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironError::MissingVar`] when the key variable is absent.
    pub fn api_key_with<F>(self, lookup: F) -> Result<String, EnvironError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = self.api_key_var();
        lookup(name).ok_or_else(|| EnvironError::MissingVar {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Environ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Media Helpers
// ============================================================================

/// Returns the checked-in sample video path.
///
/// # Errors
///
/// Returns [`EnvironError::MissingVideo`] when the file is absent.
pub fn sample_video() -> Result<PathBuf, EnvironError> {
    sample_video_at(Path::new(SAMPLE_VIDEO_PATH))
}

/// Returns `path` when it exists on disk.
///
/// # Errors
///
/// Returns [`EnvironError::MissingVideo`] when the file is absent.
pub fn sample_video_at(path: &Path) -> Result<PathBuf, EnvironError> {
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(EnvironError::MissingVideo {
            path: path.display().to_string(),
        })
    }
}

/// Reads one variable from the process environment.
fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
