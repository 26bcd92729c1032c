use super::resolve::{
    controller_template, fallback_path, resolve_attribute, strip_controller_token,
};
use super::types::{HttpVerb, RouteRecord};
use crate::docs::{load_doc_index, signature_key, DocIndex};
use crate::error::DiscoveryError;
use crate::registry::{TypeDescriptor, TypeRegistry};
use crate::runtime_config::DiscoveryConfig;
use tracing::{debug, info};

/// Discover every route of `registry`, loading the documentation index named
/// by `config`.
///
/// The index is read on every call, so descriptions always reflect the file
/// on disk. A missing or malformed documentation file fails the whole run.
pub fn discover_routes<R>(
    registry: &R,
    config: &DiscoveryConfig,
) -> Result<Vec<RouteRecord>, DiscoveryError>
where
    R: TypeRegistry + ?Sized,
{
    let docs = load_doc_index(&config.doc_path)?;
    let routes = discover_with_index(registry, &docs);
    info!(
        doc_path = %config.doc_path.display(),
        routes = routes.len(),
        "route discovery complete"
    );
    Ok(routes)
}

/// Discover routes against an already built documentation index.
pub fn discover_with_index<R>(registry: &R, docs: &DocIndex) -> Vec<RouteRecord>
where
    R: TypeRegistry + ?Sized,
{
    let mut routes = Vec::new();
    for ty in registry.types().iter().filter(|t| t.controller) {
        controller_routes(ty, docs, &mut routes);
    }
    routes
}

fn controller_routes(ty: &TypeDescriptor, docs: &DocIndex, routes: &mut Vec<RouteRecord>) {
    let type_name = ty.name.to_lowercase();
    let controller_name = strip_controller_token(&type_name);
    let api_template = controller_template(ty);
    debug!(
        controller = %ty.full_name,
        template = %api_template,
        "resolving controller"
    );

    for method in ty.actions() {
        let key = signature_key(&method.declaring_type, &method.name, &method.params);
        let description = docs.describe(&key);
        let before = routes.len();

        for attribute in &method.attributes {
            if let Some((action_path, http_verb)) = resolve_attribute(attribute, &api_template) {
                routes.push(RouteRecord {
                    controller_name: controller_name.clone(),
                    action_path,
                    http_verb,
                    description: description.to_string(),
                });
            }
        }

        if routes.len() == before {
            let action_path = fallback_path(&type_name, &method.name);
            debug!(method = %key, path = %action_path, "no routing attribute, using fallback");
            routes.push(RouteRecord {
                controller_name: controller_name.clone(),
                action_path,
                http_verb: HttpVerb::Get,
                description: description.to_string(),
            });
        }
    }
}
