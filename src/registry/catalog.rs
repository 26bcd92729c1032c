use super::types::TypeDescriptor;
use crate::error::DiscoveryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A queryable catalog of type descriptors supplied by the host.
///
/// Types are returned in the order discovery should visit them.
pub trait TypeRegistry {
    fn types(&self) -> &[TypeDescriptor];
}

/// Implemented by `#[controller]` for every annotated `impl` block.
pub trait Controller {
    fn descriptor() -> TypeDescriptor;
}

/// Explicit registration table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegistry {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller whose descriptor was generated by `#[controller]`.
    pub fn register<C: Controller>(&mut self) -> &mut Self {
        self.types.push(C::descriptor());
        self
    }

    pub fn register_type(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.push(descriptor);
        self
    }

    /// Load a manifest describing the registry.
    ///
    /// `.yaml`/`.yml` files are read as YAML, everything else as JSON.
    /// Methods that omit `declaring_type` are treated as declared on the
    /// type that lists them.
    pub fn from_manifest_file(path: impl AsRef<Path>) -> Result<Self, DiscoveryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DiscoveryError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let parsed: Result<StaticRegistry, String> = if is_yaml {
            Self::from_yaml_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };
        let mut registry = parsed.map_err(|reason| DiscoveryError::Manifest {
            path: path.to_path_buf(),
            reason,
        })?;

        for ty in &mut registry.types {
            for method in &mut ty.methods {
                if method.declaring_type.is_empty() {
                    method.declaring_type = ty.full_name.clone();
                }
            }
        }
        Ok(registry)
    }

    /// Parse a YAML manifest. Attributes are written as single-key maps
    /// (`- route: "[controller]"`, `- http_get: ~`).
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::with::singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(
            content,
        ))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeRegistry for StaticRegistry {
    fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }
}

impl TypeRegistry for Vec<TypeDescriptor> {
    fn types(&self) -> &[TypeDescriptor] {
        self
    }
}

impl FromIterator<TypeDescriptor> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        StaticRegistry {
            types: iter.into_iter().collect(),
        }
    }
}
