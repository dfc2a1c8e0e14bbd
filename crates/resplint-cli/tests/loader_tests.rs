use std::path::PathBuf;

use resplint_analyzer::{AnalyzerOptions, analyze_unit};
use resplint_cli::loader::{load_host_model, parse_host_model};
use resplint_common::CancellationToken;
use resplint_model::{ConstantValue, NodeKind, TypedConstantKind};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn analyze(unit: &resplint_model::CompilationUnit) -> Vec<resplint_common::Diagnostic> {
    analyze_unit(unit, &AnalyzerOptions::default(), &CancellationToken::new())
}

/// Wrap a single method in a host model document.
fn with_method(method: &str) -> String {
    format!(r#"{{ "file": "Api.cs", "methods": [{method}] }}"#)
}

#[test]
fn sample_controller_loads() {
    let unit = load_host_model(&fixture("values_controller.json")).unwrap();
    assert_eq!(unit.file, "Controllers/ValuesController.cs");
    assert_eq!(unit.methods.len(), 2);

    let get = &unit.methods[0];
    assert_eq!(get.name, "Get");
    assert_eq!(
        get.containing_type,
        unit.types.lookup("Sample.Controllers.ValuesController")
    );
    assert_eq!(get.attributes.len(), 4);
    assert_eq!(get.declarations.len(), 1);

    // Spans without a file belong to the unit.
    let span = get.attributes[1].span.as_ref().unwrap();
    assert_eq!(span.file, "Controllers/ValuesController.cs");
    assert_eq!(span.line, Some(12));

    let payload = &get.attributes[1].arguments[0];
    assert_eq!(payload.kind, TypedConstantKind::Type);
    assert_eq!(payload.ty, unit.types.lookup("System.Type"));
    assert_eq!(
        payload.value,
        ConstantValue::Type(unit.types.lookup("System.String").unwrap())
    );
}

#[test]
fn sample_controller_diagnostics() {
    let unit = load_host_model(&fixture("values_controller.json")).unwrap();
    let diagnostics = analyze(&unit);

    let lines: Vec<_> = diagnostics.iter().filter_map(|diag| diag.line).collect();
    assert_eq!(lines, vec![13, 22, 23]);
    assert!(
        diagnostics
            .iter()
            .all(|diag| diag.file == "Controllers/ValuesController.cs")
    );
    assert_eq!(diagnostics[0].arguments[1], "200");
    assert_eq!(diagnostics[2].arguments[1], "400");
}

#[test]
fn enum_constants_and_partial_bodies() {
    let source = with_method(
        r#"{
            "name": "Handle",
            "attributes": [{
                "class": "ProducesResponseTypeAttribute",
                "namespace": "Microsoft.AspNetCore.Mvc",
                "parameters": 1,
                "arguments": [{ "kind": "enum", "type": "System.Net.HttpStatusCode", "value": 404 }],
                "span": { "start": 5, "length": 10, "line": 1, "column": 2 }
            }, {
                "class": "ProducesResponseTypeAttribute",
                "namespace": "Microsoft.AspNetCore.Mvc",
                "parameters": 1,
                "arguments": [{ "kind": "enum", "type": "HttpStatusCode", "value": 409 }],
                "span": { "start": 25, "length": 10, "line": 2, "column": 2 }
            }],
            "bodies": [
                { "kind": "block", "statements": [
                    { "kind": "return", "expression": { "kind": "call", "callee": "Ok", "type": "OkResult",
                      "symbol": { "kind": "method", "name": "Ok" } } }
                ] },
                { "kind": "block", "statements": [
                    { "kind": "if",
                      "condition": { "kind": "identifier", "name": "missing", "type": "Boolean" },
                      "then": { "kind": "return", "expression": {
                          "kind": "call", "callee": "NotFound", "type": "NotFoundResult",
                          "symbol": { "kind": "method", "name": "NotFound" } } } }
                ] }
            ]
        }"#,
    );
    // `Boolean` is not in the prelude; the condition simply stays untyped.
    let unit = parse_host_model(&source).unwrap();
    assert_eq!(unit.methods[0].declarations.len(), 2);
    assert_eq!(
        unit.methods[0].attributes[0].arguments[0].kind,
        TypedConstantKind::Enum
    );

    let diagnostics = analyze(&unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].arguments[1], "409");
    assert_eq!(diagnostics[0].file, "Api.cs");
}

#[test]
fn unknown_types_do_not_hide_orphans() {
    let source = with_method(
        r#"{
            "name": "Get",
            "attributes": [{
                "class": "ProducesResponseTypeAttribute",
                "namespace": "Microsoft.AspNetCore.Mvc",
                "parameters": 1,
                "arguments": [{ "type": "Int32", "value": 404 }],
                "span": { "start": 5, "length": 10, "line": 1, "column": 2 }
            }, {
                "class": "ProducesResponseTypeAttribute",
                "namespace": "Microsoft.AspNetCore.Mvc",
                "parameters": 2,
                "arguments": [{ "kind": "type", "value": "App.Missing" }, { "type": "Int32", "value": 200 }],
                "span": { "start": 25, "length": 10, "line": 2, "column": 2 }
            }],
            "bodies": [{ "kind": "block", "statements": [
                { "kind": "local", "name": "ready", "initializer": {
                    "kind": "identifier", "name": "flag", "type": "System.Boolean" } },
                { "kind": "return", "expression": { "kind": "call", "callee": "Problem",
                  "type": "App.ProblemResult" } },
                { "kind": "return", "expression": { "kind": "call", "callee": "Ok", "type": "OkResult",
                  "symbol": { "kind": "method", "name": "Ok", "containingType": "App.Missing" } } }
            ] }]
        }"#,
    );
    let unit = parse_host_model(&source).unwrap();
    let diagnostics = analyze(&unit);

    // The unresolved `typeof` reads as no payload, so `Ok()` covers 200.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].arguments[1], "404");
    assert_eq!(diagnostics[0].line, Some(1));
}

#[test]
fn node_shapes_lower_to_the_arena() {
    let source = with_method(
        r#"{
            "name": "Put",
            "generated": true,
            "bodies": [{ "kind": "block", "statements": [
                { "kind": "local", "name": "f", "initializer": {
                    "kind": "lambda", "body": { "kind": "return", "expression": {
                        "kind": "call", "callee": "Conflict", "type": "ConflictResult" } } } },
                { "kind": "expression", "expression": {
                    "kind": "await", "expression": { "kind": "call", "callee": "SaveAsync" } } },
                { "kind": "other", "label": "while", "children": [{ "kind": "return" }] }
            ] }]
        }"#,
    );
    let unit = parse_host_model(&source).unwrap();
    let method = &unit.methods[0];
    assert!(method.is_generated_code);

    let root = method.declarations[0];
    let kinds: Vec<&'static str> = unit
        .arena
        .descendants(root)
        .map(|(_, node)| match node.kind {
            NodeKind::Block { .. } => "block",
            NodeKind::Return { .. } => "return",
            NodeKind::If { .. } => "if",
            NodeKind::ExpressionStatement { .. } => "expression",
            NodeKind::LocalDeclaration { .. } => "local",
            NodeKind::Invocation { .. } => "call",
            NodeKind::ObjectCreation { .. } => "new",
            NodeKind::Await { .. } => "await",
            NodeKind::Lambda { .. } => "lambda",
            NodeKind::Literal { .. } => "literal",
            NodeKind::Identifier { .. } => "identifier",
            NodeKind::Other { .. } => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "block",
            "local",
            "lambda",
            "return",
            "call",
            "expression",
            "await",
            "call",
            "other",
            "return"
        ]
    );
}

#[test]
fn malformed_documents_are_errors() {
    assert!(parse_host_model("{ not json").is_err());
    assert!(parse_host_model(r#"{ "methods": [] }"#).is_err());
    assert!(parse_host_model(&with_method(r#"{ "name": "A", "bodies": [{ "kind": "goto" }] }"#)).is_err());
    assert!(parse_host_model(r#"{ "file": "a.cs", "extra": 1 }"#).is_err());

    let err = parse_host_model(&with_method(
        r#"{ "name": "A", "attributes": [{ "class": "X", "arguments": [{ "kind": "type", "value": 3 }] }] }"#,
    ))
    .unwrap_err();
    assert!(format!("{err:#}").contains("typeof argument must name a type"));
}
