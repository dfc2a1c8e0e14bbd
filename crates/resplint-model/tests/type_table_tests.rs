//! Tests for the interned type table and base-chain walking.

use resplint_common::limits::MAX_BASE_CHAIN_DEPTH;
use resplint_model::types::base_chain;
use resplint_model::{MvcTypes, TypeDatabase, TypeKind, TypeTable};

#[test]
fn define_is_idempotent_per_qualified_name() {
    let mut table = TypeTable::new();
    let a = table.define("App", "Foo", TypeKind::Class);
    let b = table.define("App", "Foo", TypeKind::Interface);
    let c = table.define("Other", "Foo", TypeKind::Class);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(table.type_kind(a), Some(TypeKind::Class));
    assert_eq!(table.len(), 2);
}

#[test]
fn resolve_name_prefers_qualified_then_first_simple() {
    let mut table = TypeTable::new();
    let first = table.define_class("App", "Foo", None);
    let second = table.define_class("Other", "Foo", None);
    assert_eq!(table.resolve_name("Other.Foo"), Some(second));
    assert_eq!(table.resolve_name("Foo"), Some(first));
    assert_eq!(table.resolve_name("Missing"), None);
}

#[test]
fn global_namespace_types_qualify_to_their_name() {
    let mut table = TypeTable::new();
    let id = table.define_class("", "Foo", None);
    assert_eq!(table.qualified_name(id).as_deref(), Some("Foo"));
    assert_eq!(table.lookup("Foo"), Some(id));
}

#[test]
fn interfaces_are_not_duplicated() {
    let mut table = TypeTable::new();
    let iface = table.define_interface("App", "IShape");
    let class = table.define_class("App", "Circle", None);
    table.add_interface(class, iface);
    table.add_interface(class, iface);
    assert_eq!(table.interfaces(class), &[iface]);
}

#[test]
fn unknown_ids_resolve_to_nothing() {
    let table = TypeTable::new();
    let bogus = resplint_model::TypeId(42);
    assert_eq!(table.type_name(bogus), None);
    assert_eq!(table.base_type(bogus), None);
    assert!(table.interfaces(bogus).is_empty());
}

#[test]
fn base_chain_walks_nearest_first() {
    let mut table = TypeTable::new();
    let mvc = MvcTypes::register(&mut table);
    let chain: Vec<_> = base_chain(&table, Some(mvc.ok_object_result)).collect();
    assert_eq!(
        chain,
        vec![
            mvc.ok_object_result,
            mvc.object_result,
            mvc.action_result,
            mvc.object
        ]
    );
    assert_eq!(base_chain(&table, None).count(), 0);
}

#[test]
fn base_chain_terminates_on_cycles() {
    let mut table = TypeTable::new();
    let a = table.define_class("App", "A", None);
    let b = table.define_class("App", "B", Some(a));
    table.set_base(a, Some(b));
    assert_eq!(base_chain(&table, Some(a)).count(), MAX_BASE_CHAIN_DEPTH);
}

#[test]
fn prelude_registration_is_stable() {
    let mut table = TypeTable::new();
    let first = MvcTypes::register(&mut table);
    let size = table.len();
    let second = MvcTypes::register(&mut table);
    assert_eq!(first, second);
    assert_eq!(table.len(), size);
}

#[test]
fn prelude_places_forbid_outside_status_hierarchy() {
    let mut table = TypeTable::new();
    let mvc = MvcTypes::register(&mut table);
    assert_eq!(table.base_type(mvc.forbid_result), Some(mvc.action_result));
    assert_eq!(table.base_type(mvc.not_found_result), Some(mvc.status_code_result));
    assert_eq!(
        table.interfaces(mvc.bad_request_result),
        &[mvc.i_client_error_action_result]
    );
}
