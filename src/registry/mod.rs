//! # Type Registry Module
//!
//! Structural catalog of the types a service exposes. Route discovery reads
//! controller descriptors from a [`TypeRegistry`] instead of reflecting over
//! compiled metadata.
//!
//! Descriptors come from two places:
//!
//! - the `#[controller]` attribute macro, which turns an `impl` block into a
//!   [`TypeDescriptor`] at compile time and implements [`Controller`];
//! - a [`StaticRegistry`] manifest (YAML or JSON) describing the same shape.
//!
//! ```rust,ignore
//! use routescan::registry::StaticRegistry;
//!
//! let mut registry = StaticRegistry::new();
//! registry.register::<UserController>();
//! ```

mod catalog;
mod types;

pub use catalog::*;
pub use types::*;
