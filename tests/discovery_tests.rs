#![allow(clippy::unwrap_used, clippy::expect_used)]

use routescan::registry::{
    Attribute, MethodDescriptor, Receiver, StaticRegistry, TypeDescriptor, Visibility,
};
use routescan::{discover_routes, DiscoveryConfig, DiscoveryError, HttpVerb, RouteRecord};

mod common;
use common::temp_files::{doc_xml, ArtifactDir};

const USER: &str = "Namespace.UserController";

fn user_controller() -> TypeDescriptor {
    TypeDescriptor::controller("UserController", USER)
        .with_attribute(Attribute::Route(Some("[controller]".into())))
        .with_method(MethodDescriptor::new("Get", USER).with_attribute(Attribute::HttpGet(None)))
        .with_method(MethodDescriptor::new("Remove", USER).with_param("System.Int32"))
}

fn registry_of(types: Vec<TypeDescriptor>) -> StaticRegistry {
    types.into_iter().collect()
}

fn record(controller: &str, path: &str, verb: HttpVerb, description: &str) -> RouteRecord {
    RouteRecord {
        controller_name: controller.into(),
        action_path: path.into(),
        http_verb: verb,
        description: description.into(),
    }
}

#[test]
fn test_user_controller_end_to_end() {
    let artifact = ArtifactDir::with_doc(
        "Namespace",
        &doc_xml(&[("M:Namespace.UserController.Get", "Fetch user list")]),
    );
    let config = DiscoveryConfig::for_artifact(&artifact.artifact);
    let routes = discover_routes(&registry_of(vec![user_controller()]), &config).unwrap();

    assert_eq!(
        routes,
        vec![
            record("user", "/user", HttpVerb::Get, "Fetch user list"),
            record("user", "/user/remove", HttpVerb::Get, ""),
        ]
    );
}

#[test]
fn test_missing_documentation_is_fatal() {
    let artifact = ArtifactDir::new("Namespace");
    let config = DiscoveryConfig::for_artifact(&artifact.artifact);

    let result = discover_routes(&registry_of(vec![user_controller()]), &config);
    match result {
        Err(DiscoveryError::DocumentationMissing { path }) => assert_eq!(path, artifact.doc),
        other => panic!("expected DocumentationMissing, got {other:?}"),
    }
}

#[test]
fn test_malformed_documentation_is_fatal() {
    let artifact = ArtifactDir::with_doc("Namespace", "<doc><members><member>");
    let config = DiscoveryConfig::for_artifact(&artifact.artifact);
    let err = discover_routes(&registry_of(vec![user_controller()]), &config).unwrap_err();
    assert!(matches!(err, DiscoveryError::MalformedDocumentation { .. }));
}

#[test]
fn test_his_user_controller_routes() {
    const HIS: &str = "HisAPI.Controllers.HisUserController";
    let controller = TypeDescriptor::controller("HisUserController", HIS)
        .with_attribute(Attribute::Other("Authorize".into()))
        .with_attribute(Attribute::Route(Some("hisapi/[controller]".into())))
        .with_method(MethodDescriptor::new("Get", HIS).with_attribute(Attribute::HttpGet(None)))
        .with_method(
            MethodDescriptor::new("Get", HIS)
                .with_param("System.Int32")
                .with_attribute(Attribute::HttpGet(Some("{id}".into()))),
        )
        .with_method(
            MethodDescriptor::new("Post", HIS)
                .with_param("System.String")
                .with_attribute(Attribute::HttpPost(None)),
        )
        .with_method(
            MethodDescriptor::new("Put", HIS)
                .with_param("System.Int32")
                .with_param("System.String")
                .with_attribute(Attribute::HttpPut(Some("{id}".into()))),
        )
        .with_method(
            MethodDescriptor::new("Delete", HIS)
                .with_param("System.Int32")
                .with_attribute(Attribute::HttpDelete(Some("{id}".into()))),
        )
        .with_method(
            MethodDescriptor::new("Denied", HIS)
                .with_attribute(Attribute::Other("AllowAnonymous".into()))
                .with_attribute(Attribute::HttpGet(Some("/hisapi/denied".into()))),
        )
        .with_method(
            MethodDescriptor::new("Health", HIS)
                .with_attribute(Attribute::Other("AllowAnonymous".into()))
                .with_attribute(Attribute::HttpGet(Some("/health".into()))),
        );

    let artifact = ArtifactDir::with_doc(
        "HisAPI",
        &doc_xml(&[
            ("M:HisAPI.Controllers.HisUserController.Health", "Health check"),
            (
                "M:HisAPI.Controllers.HisUserController.Put(System.Int32,System.String)",
                "Update a user",
            ),
        ]),
    );
    let routes = discover_routes(
        &registry_of(vec![controller]),
        &DiscoveryConfig::for_artifact(&artifact.artifact),
    )
    .unwrap();

    assert_eq!(
        routes,
        vec![
            record("hisuser", "/hisapi/hisuser", HttpVerb::Get, ""),
            record("hisuser", "/hisapi/hisuser/{id}", HttpVerb::Get, ""),
            record("hisuser", "/hisapi/hisuser", HttpVerb::Post, ""),
            record("hisuser", "/hisapi/hisuser/{id}", HttpVerb::Put, "Update a user"),
            record("hisuser", "/hisapi/hisuser/{id}", HttpVerb::Delete, ""),
            record("hisuser", "/hisapi/denied", HttpVerb::Get, ""),
            record("hisuser", "/health", HttpVerb::Get, "Health check"),
        ]
    );
}

#[test]
fn test_multiple_attributes_emit_multiple_records_in_order() {
    const ORDERS: &str = "Shop.OrdersController";
    let controller = TypeDescriptor::controller("OrdersController", ORDERS)
        .with_attribute(Attribute::Route(Some("/api/[controller]".into())))
        .with_method(
            MethodDescriptor::new("Upsert", ORDERS)
                .with_attribute(Attribute::HttpPut(None))
                .with_attribute(Attribute::HttpPost(Some("Bulk".into())))
                .with_attribute(Attribute::Route(Some("ignored/{id}".into()))),
        );
    let artifact = ArtifactDir::with_doc("Shop", &doc_xml(&[]));

    let routes = discover_routes(
        &registry_of(vec![controller]),
        &DiscoveryConfig::for_documentation(&artifact.doc),
    )
    .unwrap();

    assert_eq!(
        routes,
        vec![
            record("orders", "/api/orders", HttpVerb::Put, ""),
            record("orders", "/api/orders/bulk", HttpVerb::Post, ""),
            record("orders", "/api/orders", HttpVerb::Get, ""),
        ]
    );
}

#[test]
fn test_only_declared_public_instance_methods_are_actions() {
    let controller = user_controller()
        .with_method(MethodDescriptor::new("Audit", USER).with_visibility(Visibility::Private))
        .with_method(MethodDescriptor::new("Create", USER).with_receiver(Receiver::Static))
        .with_method(MethodDescriptor::new("Dispose", "Namespace.BaseController"));
    let artifact = ArtifactDir::with_doc("Namespace", &doc_xml(&[]));

    let routes = discover_routes(
        &registry_of(vec![controller]),
        &DiscoveryConfig::for_artifact(&artifact.artifact),
    )
    .unwrap();
    let paths: Vec<_> = routes.iter().map(|r| r.action_path.as_str()).collect();
    assert_eq!(paths, vec!["/user", "/user/remove"]);
}

#[test]
fn test_every_unannotated_method_gets_one_fallback_route() {
    const REPORTS: &str = "Api.ReportsController";
    let controller = TypeDescriptor::controller("ReportsController", REPORTS)
        .with_method(MethodDescriptor::new("Daily", REPORTS))
        .with_method(
            MethodDescriptor::new("ByMonth", REPORTS)
                .with_param("System.Int32")
                .with_attribute(Attribute::Other("Obsolete".into()))
                .with_attribute(Attribute::Route(None)),
        );
    let artifact = ArtifactDir::with_doc("Api", &doc_xml(&[]));

    let routes = discover_routes(
        &registry_of(vec![controller]),
        &DiscoveryConfig::for_artifact(&artifact.artifact),
    )
    .unwrap();
    assert_eq!(
        routes,
        vec![
            record("reports", "/reports/daily", HttpVerb::Get, ""),
            record("reports", "/reports/bymonth", HttpVerb::Get, ""),
        ]
    );
}

#[test]
fn test_description_follows_signature_not_position() {
    let artifact = ArtifactDir::with_doc(
        "Namespace",
        &doc_xml(&[
            ("M:Namespace.UserController.Remove(System.Int32)", "Remove by id"),
            ("M:Namespace.UserController.Remove(System.String)", "Remove by name"),
        ]),
    );
    let controller = TypeDescriptor::controller("UserController", USER)
        .with_method(MethodDescriptor::new("Remove", USER).with_param("System.String"))
        .with_method(MethodDescriptor::new("Remove", USER).with_param("System.Int32"));

    let routes = discover_routes(
        &registry_of(vec![controller]),
        &DiscoveryConfig::for_artifact(&artifact.artifact),
    )
    .unwrap();
    let descriptions: Vec<_> = routes.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Remove by name", "Remove by id"]);
}

#[test]
fn test_type_order_is_preserved() {
    let artifact = ArtifactDir::with_doc("Api", &doc_xml(&[]));
    let registry = registry_of(vec![
        TypeDescriptor::controller("ZetaController", "Api.ZetaController")
            .with_method(MethodDescriptor::new("Index", "Api.ZetaController")),
        TypeDescriptor::plain("UserDto", "Api.UserDto")
            .with_method(MethodDescriptor::new("Validate", "Api.UserDto")),
        TypeDescriptor::controller("AlphaController", "Api.AlphaController")
            .with_method(MethodDescriptor::new("Index", "Api.AlphaController")),
    ]);

    let routes =
        discover_routes(&registry, &DiscoveryConfig::for_artifact(&artifact.artifact)).unwrap();
    let controllers: Vec<_> = routes.iter().map(|r| r.controller_name.as_str()).collect();
    assert_eq!(controllers, vec!["zeta", "alpha"]);
}

#[test]
fn test_manifest_registry_matches_builder_registry() {
    let artifact = ArtifactDir::with_doc(
        "Namespace",
        &doc_xml(&[("M:Namespace.UserController.Get", "Fetch user list")]),
    );
    let manifest = artifact.write(
        "registry.json",
        r#"{
  "types": [
    {
      "name": "UserController",
      "full_name": "Namespace.UserController",
      "controller": true,
      "attributes": [ { "route": "[controller]" } ],
      "methods": [
        { "name": "Get", "attributes": [ { "http_get": null } ] },
        { "name": "Remove", "params": ["System.Int32"] }
      ]
    }
  ]
}"#,
    );

    let config = DiscoveryConfig::for_artifact(&artifact.artifact);
    let from_manifest =
        discover_routes(&StaticRegistry::from_manifest_file(&manifest).unwrap(), &config).unwrap();
    let from_builder = discover_routes(&registry_of(vec![user_controller()]), &config).unwrap();
    assert_eq!(from_manifest, from_builder);
}
