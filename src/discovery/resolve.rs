use super::types::HttpVerb;
use crate::registry::{Attribute, AttributeKind, TypeDescriptor};

const CONTROLLER_TOKEN: &str = "controller";
const CONTROLLER_PLACEHOLDER: &str = "[controller]";

/// Remove every `controller` token from an already lowercased type name.
pub fn strip_controller_token(lowercase_name: &str) -> String {
    lowercase_name.replace(CONTROLLER_TOKEN, "")
}

/// Controller-level route template of `ty`, empty when it has none.
///
/// Taken from the type's generic `Route` attribute: lowercased, one leading
/// `/` removed and `[controller]` replaced by the stripped type name. The
/// last `Route` attribute with a template wins.
pub fn controller_template(ty: &TypeDescriptor) -> String {
    let controller = strip_controller_token(&ty.name.to_lowercase());
    ty.attributes
        .iter()
        .filter_map(|attr| match attr {
            Attribute::Route(Some(template)) => Some(template),
            _ => None,
        })
        .last()
        .map(|template| {
            let lower = template.to_lowercase();
            lower
                .strip_prefix('/')
                .unwrap_or(&lower)
                .replace(CONTROLLER_PLACEHOLDER, &controller)
        })
        .unwrap_or_default()
}

fn verb_for(kind: AttributeKind) -> HttpVerb {
    match kind {
        AttributeKind::Route | AttributeKind::Get => HttpVerb::Get,
        AttributeKind::Post => HttpVerb::Post,
        AttributeKind::Put => HttpVerb::Put,
        AttributeKind::Delete => HttpVerb::Delete,
    }
}

/// Resolve one method attribute against the controller template.
///
/// Returns `None` for attributes that do not produce a route: anything
/// outside the routing vocabulary and a `Route` without template.
pub fn resolve_attribute(attribute: &Attribute, api_template: &str) -> Option<(String, HttpVerb)> {
    let kind = attribute.kind()?;
    let template = attribute.template().map(str::to_lowercase);

    let path = match (kind, template) {
        (AttributeKind::Route, None) => return None,
        (_, Some(absolute)) if absolute.starts_with('/') => absolute,
        // The method's own template is not used here.
        (AttributeKind::Route, Some(_)) => format!("/{api_template}"),
        (_, Some(relative)) => format!("/{api_template}/{relative}"),
        (_, None) => format!("/{api_template}"),
    };
    Some((path, verb_for(kind)))
}

/// Path of the GET route synthesized for a method without routing attributes.
pub fn fallback_path(lowercase_controller: &str, method_name: &str) -> String {
    let method = method_name.to_lowercase();
    format!(
        "/{}/{}",
        strip_controller_token(lowercase_controller),
        method.trim_start_matches('/')
    )
}
