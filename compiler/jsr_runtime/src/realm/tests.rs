use super::*;
use crate::errors::EvalErrorKind;
use crate::print_handler::buffer_handler;
use crate::{assertion_failed, EvalError};

#[test]
fn test_get_unbound_is_none() {
    let realm = Realm::new();
    assert_eq!(realm.get("x"), None);
    assert!(!realm.contains("x"));
    assert!(realm.is_empty());
}

#[test]
fn test_set_get() {
    let mut realm = Realm::new();
    realm.set("x", Value::Bool(true));
    assert_eq!(realm.get("x"), Some(Value::Bool(true)));
    assert!(realm.contains("x"));
    assert_eq!(realm.len(), 1);
}

#[test]
fn test_last_write_wins() {
    let mut realm = Realm::new();
    realm.set("x", Value::Bool(true));
    realm.set("x", Value::Bool(false));
    assert_eq!(realm.get("x"), Some(Value::Bool(false)));
    assert_eq!(realm.len(), 1);

    // Replacement is not restricted to the same kind
    realm.set("x", Value::string("now a string"));
    assert_eq!(realm.get("x"), Some(Value::string("now a string")));
}

#[test]
fn test_names_are_case_sensitive() {
    let mut realm = Realm::new();
    realm.set("Print", Value::Bool(true));
    assert_eq!(realm.get("print"), None);
    assert_eq!(realm.get("Print"), Some(Value::Bool(true)));
}

#[test]
fn test_new_realm_is_not_initialized() {
    let realm = Realm::new();
    assert!(!realm.contains("print"));
    assert!(!realm.contains("assert"));
}

#[test]
fn test_initialize_installs_natives() {
    let mut realm = Realm::new();
    realm.initialize();
    assert_eq!(
        realm.get("print").unwrap().display_value(),
        "function print() { [native code] }"
    );
    assert_eq!(
        realm.get("assert").unwrap().display_value(),
        "function assert() { [native code] }"
    );
    assert_eq!(realm.len(), 2);
}

#[test]
fn test_initialize_twice_rebinds_fresh_instances() {
    let mut realm = Realm::new();
    realm.initialize();
    let first = realm.get("print").unwrap();
    realm.initialize();
    let second = realm.get("print").unwrap();

    assert_eq!(realm.len(), 2);
    assert_eq!(first.display_value(), second.display_value());
    assert_ne!(first, second);
}

#[test]
fn test_initialize_overwrites_user_binding() {
    let mut realm = Realm::new();
    realm.set("print", Value::Bool(false));
    realm.initialize();
    assert!(realm.get("print").unwrap().as_native().is_some());
}

#[test]
fn test_values_outlive_realm() {
    let value = {
        let mut realm = Realm::new();
        realm.set("s", Value::string("kept"));
        realm.get("s").unwrap()
    };
    assert_eq!(value.as_str(), Some("kept"));
}

#[test]
fn test_resolve_unbound() {
    let realm = Realm::new();
    let err = realm.resolve("missing").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnresolvedBinding {
            name: "missing".to_string()
        }
    );
}

#[test]
fn test_call_by_name() {
    let handler = buffer_handler();
    let mut realm = Realm::builder().print_handler(handler.clone()).build();
    realm.call("print", &[Value::string("hi")]).unwrap();
    assert_eq!(handler.output(), "hi\n");
}

#[test]
fn test_call_unbound_name() {
    let mut realm = Realm::new();
    let err = realm.call("nope", &[]).unwrap_err();
    assert_eq!(err.message, "nope is not defined");
}

#[test]
fn test_call_propagates_native_failure() {
    let mut realm = Realm::builder().print_handler(buffer_handler()).build();
    let err = realm
        .call("assert", &[Value::Bool(false), Value::string("boom")])
        .unwrap_err();
    assert_eq!(err, assertion_failed(Some("boom")));
}

#[test]
fn test_native_can_define_globals() {
    let mut realm = Realm::new();
    realm.set(
        "define",
        Value::native(
            "define",
            |realm: &mut Realm, args: &[Value]| -> CallResult {
                let name = args
                    .first()
                    .and_then(Value::as_str)
                    .ok_or_else(|| EvalError::new("define expects a name"))?
                    .to_string();
                realm.set(name, Value::Bool(true));
                Ok(())
            },
        ),
    );
    realm.call("define", &[Value::string("flag")]).unwrap();
    assert_eq!(realm.get("flag"), Some(Value::Bool(true)));
}

#[test]
fn test_builder_without_stdlib() {
    let realm = Realm::builder().without_stdlib().build();
    assert!(realm.is_empty());
}

#[test]
fn test_builder_defaults_to_initialized() {
    let realm = RealmBuilder::default().build();
    assert!(realm.contains("print"));
    assert!(realm.contains("assert"));
}

#[test]
fn test_debug_lists_sorted_names() {
    let mut realm = Realm::new();
    realm.set("b", Value::Bool(true));
    realm.set("a", Value::Bool(true));
    assert_eq!(format!("{realm:?}"), "Realm { bindings: [\"a\", \"b\"] }");
}
