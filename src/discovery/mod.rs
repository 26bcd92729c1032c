//! # Route Discovery Module
//!
//! Turns a [`TypeRegistry`](crate::registry::TypeRegistry) and a
//! [`DocIndex`](crate::docs::DocIndex) into a flat table of
//! [`RouteRecord`]s.
//!
//! ## Resolution
//!
//! For every controller type the generic `Route` attribute on the type
//! yields the controller template (`[controller]` replaced by the type name
//! without its `controller` token). Every directly declared public instance
//! method is then resolved attribute by attribute:
//!
//! | Attribute | Template | Path | Verb |
//! |---|---|---|---|
//! | `Route` | starts with `/` | template | GET |
//! | `Route` | other | `/{controller template}` | GET |
//! | verb | starts with `/` | template | verb |
//! | verb | other | `/{controller template}/{template}` | verb |
//! | verb | none | `/{controller template}` | verb |
//!
//! A method no attribute resolved for gets one GET route at
//! `/{controller}/{method}`.
//!
//! The relative `Route` case drops the method's own template text, unlike
//! the verb attributes.
//!
//! ## Ordering
//!
//! Records follow registry type order, then method order, then attribute
//! order. Nothing is sorted or deduplicated; use [`sort_routes`] for a
//! canonical order.

mod build;
mod cache;
mod resolve;
mod types;

pub use build::{discover_routes, discover_with_index};
pub use cache::RouteCatalog;
pub use resolve::{controller_template, fallback_path, resolve_attribute, strip_controller_token};
pub use types::{sort_routes, HttpVerb, RouteRecord};
