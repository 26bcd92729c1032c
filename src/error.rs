use std::fmt;
use std::path::PathBuf;

/// Failure of a discovery run.
///
/// Every variant aborts the run; discovery never returns a partial route
/// table.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The documentation file does not exist at the derived path.
    DocumentationMissing {
        /// Path that was probed
        path: PathBuf,
    },
    /// The documentation file exists but is not a `doc/members/member` tree.
    MalformedDocumentation {
        path: PathBuf,
        reason: String,
    },
    /// Two members normalize to the same signature key.
    DuplicateSignature {
        path: PathBuf,
        key: String,
    },
    /// The documentation file exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A registry manifest could not be read or parsed.
    Manifest {
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::DocumentationMissing { path } => {
                write!(
                    f,
                    "Documentation file '{}' does not exist. \
                    Enable documentation file output for the build that produced the artifact.",
                    path.display()
                )
            }
            DiscoveryError::MalformedDocumentation { path, reason } => {
                write!(
                    f,
                    "Documentation file '{}' is malformed: {}",
                    path.display(),
                    reason
                )
            }
            DiscoveryError::DuplicateSignature { path, key } => {
                write!(
                    f,
                    "Documentation file '{}' documents '{}' more than once",
                    path.display(),
                    key
                )
            }
            DiscoveryError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            DiscoveryError::Manifest { path, reason } => {
                write!(
                    f,
                    "Registry manifest '{}' could not be loaded: {}",
                    path.display(),
                    reason
                )
            }
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiscoveryError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
