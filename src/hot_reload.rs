//! # Hot Reload Module
//!
//! Keeps a live route table in step with the documentation file.
//!
//! [`watch_documentation`] watches the XML file and, whenever it is modified
//! or recreated, rebuilds the full route table and swaps it into the shared
//! [`LiveRoutes`] handle. Readers load the current table without locking and
//! always see either the previous table or the new one, never a mix.
//!
//! If the new file fails to load (deleted mid-write, malformed, duplicate
//! keys) the error is logged and the previous table stays active.
//!
//! ```rust,ignore
//! use routescan::hot_reload::{live_routes, watch_documentation};
//!
//! let live = live_routes(discover_routes(&registry, &config)?);
//! let _watcher = watch_documentation(&config.doc_path, registry, live.clone(), |routes| {
//!     println!("reloaded {} routes", routes.len());
//! })?;
//! ```

use crate::discovery::{discover_with_index, RouteRecord};
use crate::docs::load_doc_index;
use crate::registry::TypeRegistry;
use arc_swap::ArcSwap;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared, atomically replaceable route table.
pub type LiveRoutes = Arc<ArcSwap<Vec<RouteRecord>>>;

pub fn live_routes(initial: Vec<RouteRecord>) -> LiveRoutes {
    Arc::new(ArcSwap::from_pointee(initial))
}

/// Watch `doc_path` and republish the route table of `registry` on change.
///
/// `on_reload` runs after each successful swap with the new table.
pub fn watch_documentation<P, R, F>(
    doc_path: P,
    registry: R,
    routes: LiveRoutes,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    R: TypeRegistry + Send + 'static,
    F: FnMut(&[RouteRecord]) + Send + 'static,
{
    let path: PathBuf = doc_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                match load_doc_index(&watch_path) {
                    Ok(docs) => {
                        let table = Arc::new(discover_with_index(&registry, &docs));
                        info!(
                            path = %watch_path.display(),
                            routes = table.len(),
                            "hot-reload: route table rebuilt"
                        );
                        routes.store(Arc::clone(&table));
                        on_reload(table.as_slice());
                    }
                    Err(e) => warn!(
                        path = %watch_path.display(),
                        error = %e,
                        "hot-reload: keeping previous route table"
                    ),
                }
            }
            Err(e) => warn!(error = ?e, "watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
