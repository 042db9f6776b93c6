//! End-to-end composition through the public SDK.

use std::sync::Arc;

use serde_json::json;
use traitmix_common::error::TraitmixError;
use traitmix_compose::ConstructorArgs;
use traitmix_core::{AttributeDef, ClassDef, ComponentDef, ComponentRegistry, Method, ValueKind};
use traitmix_sdk::Composer;

fn registry() -> ComponentRegistry {
    let registry = ComponentRegistry::new();
    let _ = registry.register(
        ComponentDef::builder("Role")
            .attribute(AttributeDef::new("bar").kind(ValueKind::Int).default_value(0))
            .method("baz", Method::constant("baz"))
            .build(),
    );
    let _ = registry.register(
        ComponentDef::builder("Another::Trait")
            .method("whoami", Method::constant("relative"))
            .build(),
    );
    let _ = registry.register(
        ComponentDef::builder("Trait")
            .method("whoami", Method::constant("absolute"))
            .build(),
    );
    let _ = registry.register(
        ComponentDef::builder("Doubler")
            .requires("foo")
            .method(
                "double",
                Method::new(|this, _| {
                    let foo = this.call("foo", &[])?;
                    Ok(json!(foo.as_i64().unwrap_or_default() * 2))
                }),
            )
            .build(),
    );
    registry
}

fn class() -> Arc<ClassDef> {
    ClassDef::builder("Class")
        .attribute(AttributeDef::new("foo").kind(ValueKind::Int).required())
        .method("foo", Method::getter("foo"))
        .build()
}

#[test]
fn instance_with_role_isa_class_and_does_role() {
    let composer = Composer::new(Arc::new(registry()));
    let instance = composer
        .new_with_traits(
            &class(),
            ConstructorArgs::from_pairs([("traits", json!(["Role"])), ("foo", json!(42))]),
        )
        .expect("new_with_traits");

    assert!(instance.isa("Class"));
    assert!(instance.does("Role"));
    assert_eq!(instance.get("foo"), Some(&json!(42)));
    assert_eq!(instance.get("bar"), Some(&json!(0)));
    assert_eq!(instance.call("baz", &[]).expect("baz"), json!("baz"));
}

#[test]
fn bundle_and_discrete_arguments_build_equal_instances() {
    let composer = Composer::new(Arc::new(registry()));
    let base = class();
    let from_bundle = composer
        .new_with_traits(
            &base,
            ConstructorArgs::from_bundle(json!({"traits": "Role", "foo": 7})).expect("bundle"),
        )
        .expect("bundle instance");
    let from_pairs = composer
        .new_with_traits(&base, ConstructorArgs::new().with("traits", "Role").with("foo", 7))
        .expect("pair instance");
    assert_eq!(from_bundle, from_pairs);
}

#[test]
fn namespaced_base_resolves_relative_and_absolute_traits() {
    let composer = Composer::new(Arc::new(registry()));
    let base = ClassDef::builder("Another::Class")
        .namespace_prefix("Another")
        .build();

    let resolved = composer.resolve(&base, &["Trait", "+Trait"]).expect("resolve");
    let names: Vec<&str> = resolved.iter().map(|id| id.as_str()).collect();
    assert_eq!(names, ["Another::Trait", "Trait"]);

    let relative = composer
        .new_with_traits(&base, ConstructorArgs::new().with("traits", "Trait"))
        .expect("relative");
    assert_eq!(relative.call("whoami", &[]).expect("whoami"), json!("relative"));

    let absolute = composer
        .new_with_traits(&base, ConstructorArgs::new().with("traits", "+Trait"))
        .expect("absolute");
    assert_eq!(absolute.call("whoami", &[]).expect("whoami"), json!("absolute"));
}

#[test]
fn trait_methods_can_call_base_methods() {
    let composer = Composer::new(Arc::new(registry()));
    let instance = composer
        .builder(&class())
        .trait_name("Doubler")
        .arg("foo", 21)
        .build()
        .expect("build");
    assert_eq!(instance.call("double", &[]).expect("double"), json!(42));
}

#[test]
fn unmet_requirement_is_reported_and_not_cached() {
    let composer = Composer::new(Arc::new(registry()));
    let bare = ClassDef::builder("Bare").build();
    let err = composer.with_traits(&bare, &["Doubler"]).unwrap_err();
    assert!(matches!(err, TraitmixError::MissingRequirement { .. }));
    assert_eq!(composer.cache_len(), 0);
}

#[test]
fn shared_composer_serves_concurrent_callers() {
    let composer = Arc::new(Composer::new(Arc::new(registry())));
    let base = class();
    let requests: [&[&str]; 3] = [&["Role"], &["Role", "Doubler"], &["Doubler", "Role"]];

    let classes: Vec<Vec<Arc<ClassDef>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let composer = Arc::clone(&composer);
                let base = Arc::clone(&base);
                scope.spawn(move || {
                    requests
                        .iter()
                        .map(|traits| composer.with_traits(&base, *traits).expect("compose"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("join"))
            .collect()
    });

    for per_thread in &classes {
        for (ours, reference) in per_thread.iter().zip(&classes[0]) {
            assert!(Arc::ptr_eq(ours, reference));
        }
    }
    assert!(!Arc::ptr_eq(&classes[0][1], &classes[0][2]));
    assert_eq!(composer.cache_len(), 3);
}
