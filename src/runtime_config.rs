//! # Runtime Configuration Module
//!
//! Explicit configuration for route discovery. The documentation file is
//! never located implicitly by the engine; it is named here.
//!
//! ## Environment Variables
//!
//! ### `ROUTESCAN_DOC_PATH`
//!
//! Path of the documentation XML file. Takes precedence over everything else.
//!
//! ### `ROUTESCAN_ARTIFACT_PATH`
//!
//! Path of the compiled artifact; the documentation path is derived from it
//! by swapping the extension for `xml`.
//!
//! When neither is set the running executable is used as the artifact.
//!
//! ## Usage
//!
//! ```rust
//! use routescan::runtime_config::DiscoveryConfig;
//!
//! let config = DiscoveryConfig::for_artifact("bin/HisAPI.dll");
//! assert_eq!(config.doc_path, std::path::PathBuf::from("bin/HisAPI.xml"));
//! ```

use crate::docs::documentation_path_for;
use std::env;
use std::path::{Path, PathBuf};

pub const DOC_PATH_ENV: &str = "ROUTESCAN_DOC_PATH";
pub const ARTIFACT_PATH_ENV: &str = "ROUTESCAN_ARTIFACT_PATH";

/// Where discovery reads its documentation from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Documentation XML file
    pub doc_path: PathBuf,
}

impl DiscoveryConfig {
    /// Use the documentation file that accompanies `artifact`.
    pub fn for_artifact(artifact: impl AsRef<Path>) -> Self {
        DiscoveryConfig {
            doc_path: documentation_path_for(artifact.as_ref()),
        }
    }

    /// Use `doc_path` as the documentation file.
    pub fn for_documentation(doc_path: impl Into<PathBuf>) -> Self {
        DiscoveryConfig {
            doc_path: doc_path.into(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> std::io::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> std::io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(doc) = lookup(DOC_PATH_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::for_documentation(doc));
        }
        if let Some(artifact) = lookup(ARTIFACT_PATH_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::for_artifact(artifact));
        }
        Ok(Self::for_artifact(env::current_exe()?))
    }
}
