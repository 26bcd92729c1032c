//! # CLI Module
//!
//! Command-line front end of the `routescan` binary.
//!
//! ## Commands
//!
//! ### `docs`
//!
//! Print the documentation index of an XML file, sorted by signature key:
//!
//! ```bash
//! routescan docs --doc bin/HisAPI.xml
//! ```
//!
//! ### `check`
//!
//! Validate a documentation file and report how many methods it documents.
//! Exits non-zero when the file is missing or malformed.
//!
//! ```bash
//! routescan check --doc bin/HisAPI.xml
//! ```
//!
//! ### `routes`
//!
//! Discover the route table of a registry manifest:
//!
//! ```bash
//! routescan routes --registry registry.yaml --artifact bin/HisAPI.dll --sort
//! routescan routes --registry registry.json --doc bin/HisAPI.xml --format json
//! ```
//!
//! Without `--doc` or `--artifact` the documentation path comes from
//! `ROUTESCAN_DOC_PATH` / `ROUTESCAN_ARTIFACT_PATH`. `--watch` keeps running
//! and prints the table again whenever the documentation file changes.

mod commands;


pub use commands::{run, run_cli, Cli, Commands, OutputFormat};
