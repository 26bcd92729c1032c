use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpVerb> for http::Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => http::Method::GET,
            HttpVerb::Post => http::Method::POST,
            HttpVerb::Put => http::Method::PUT,
            HttpVerb::Delete => http::Method::DELETE,
        }
    }
}

/// One resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteRecord {
    /// Lowercase controller type name without its `controller` token.
    pub controller_name: String,
    /// Lowercase path, always starting with `/`.
    pub action_path: String,
    pub http_verb: HttpVerb,
    /// Summary from the documentation index, empty when undocumented.
    pub description: String,
}

/// Sort by controller, then path, then verb.
pub fn sort_routes(routes: &mut [RouteRecord]) {
    routes.sort_by(|a, b| {
        a.controller_name
            .cmp(&b.controller_name)
            .then_with(|| a.action_path.cmp(&b.action_path))
            .then_with(|| a.http_verb.cmp(&b.http_verb))
    });
}
