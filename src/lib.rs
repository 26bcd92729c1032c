//! # routescan
//!
//! **routescan** builds the table of routable endpoints of a controller surface
//! (controller, path, HTTP verb, description) without a hand-maintained route
//! manifest. The table is what an API gateway or documentation generator
//! consumes to register proxied routes automatically.
//!
//! ## Architecture
//!
//! - **[`registry`]** - Structural catalog of controller types and their methods
//! - **[`docs`]** - Documentation index built from the artifact's XML doc file
//! - **[`discovery`]** - Verb/path resolution and description lookup
//! - **[`hot_reload`]** - Rebuilds a live route table when the doc file changes
//! - **[`runtime_config`]** - Where the documentation file lives
//! - **[`cli`]** - The `routescan` binary
//!
//! ### Discovery Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Discovery as discovery::discover_routes
//!     participant Docs as docs::load_doc_index
//!     participant Registry as TypeRegistry
//!
//!     Caller->>Discovery: discover_routes(&registry, &config)
//!     Discovery->>Docs: load_doc_index(config.doc_path)
//!     Docs-->>Discovery: DocIndex (or DocumentationMissing)
//!     Discovery->>Registry: types()
//!     loop controller types
//!         Discovery->>Discovery: controller_template(type)
//!         loop declared public instance methods
//!             Discovery->>Discovery: signature_key + describe
//!             Discovery->>Discovery: resolve_attribute per attribute
//!             Discovery->>Discovery: fallback GET route if none resolved
//!         end
//!     end
//!     Discovery-->>Caller: Vec<RouteRecord>
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routescan::registry::StaticRegistry;
//! use routescan::{controller, discover_routes, DiscoveryConfig};
//!
//! pub struct UserController;
//!
//! #[controller(route = "api/[controller]")]
//! impl UserController {
//!     #[http_get]
//!     pub fn list(&self) -> Vec<String> { Vec::new() }
//!
//!     #[http_delete("{id}")]
//!     pub fn remove(&self, id: u32) {}
//! }
//!
//! let mut registry = StaticRegistry::new();
//! registry.register::<UserController>();
//!
//! let routes = discover_routes(&registry, &DiscoveryConfig::from_env()?)?;
//! ```
//!
//! A missing documentation file fails discovery with
//! [`DiscoveryError::DocumentationMissing`]; there is no partial result.

pub mod cli;
pub mod discovery;
pub mod docs;
pub mod error;
pub mod hot_reload;
pub mod logging;
pub mod registry;
pub mod runtime_config;

pub use discovery::{
    discover_routes, discover_with_index, sort_routes, HttpVerb, RouteCatalog, RouteRecord,
};
pub use docs::{load_doc_index, DocIndex};
pub use error::DiscoveryError;
pub use routescan_macros::controller;
pub use runtime_config::DiscoveryConfig;
