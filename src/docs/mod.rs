//! # Documentation Index Module
//!
//! Builds the side-channel documentation index that route discovery uses to
//! attach a description to every action.
//!
//! The documentation file sits next to the compiled artifact with the same
//! base name and an `xml` extension, and has the shape
//!
//! ```xml
//! <doc>
//!   <members>
//!     <member name="M:Api.UserController.Get">
//!       <summary>Fetch user list</summary>
//!     </member>
//!   </members>
//! </doc>
//! ```
//!
//! Only method members (`M:` prefix) are indexed. Their keys are normalized
//! so that parameterless methods always carry `()`, which makes lookups by
//! [`signature_key`] uniform.
//!
//! A missing file is a configuration error, never an empty index.

mod index;
mod load;
mod signature;

pub use index::DocIndex;
pub use load::{documentation_path_for, load_doc_index, parse_doc_index};
pub use signature::{normalize_member_key, signature_key, METHOD_MARKER};
