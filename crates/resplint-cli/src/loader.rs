//! JSON host models.
//!
//! A host that has already parsed and bound a source file serializes what the
//! analyzer needs: the types it references, the methods with their
//! attributes, and a statement/expression tree per method declaration with
//! static types attached.
//!
//! ```json
//! {
//!   "file": "Controllers/ValuesController.cs",
//!   "types": [{ "name": "Book", "namespace": "App", "base": "System.Object" }],
//!   "methods": [{
//!     "name": "Get",
//!     "attributes": [{
//!       "class": "ProducesResponseTypeAttribute",
//!       "namespace": "Microsoft.AspNetCore.Mvc",
//!       "parameters": 2,
//!       "arguments": [
//!         { "kind": "type", "value": "Book" },
//!         { "kind": "primitive", "type": "System.Int32", "value": 200 }
//!       ]
//!     }],
//!     "bodies": [{ "kind": "block", "statements": [
//!       { "kind": "return", "expression": {
//!         "kind": "call", "callee": "Ok", "type": "OkObjectResult",
//!         "symbol": { "kind": "method", "name": "Ok" },
//!         "arguments": [{ "kind": "identifier", "name": "book", "type": "Book" }]
//!       } }
//!     ] }]
//!   }]
//! }
//! ```
//!
//! Type references are qualified (`System.String`) or simple (`Book`) names.
//! With `"preludeMvc": true` (the default) the common `System` and ASP.NET
//! Core MVC types are predefined. A reference to a type the model does not
//! define is logged and left unresolved; the analyzer then treats it as "not
//! a match".

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use resplint_common::SourceSpan;
use resplint_model::well_known::SYSTEM;
use resplint_model::{
    AttributeData, CompilationUnit, ConstantValue, MethodSymbol, MvcTypes, NodeIndex, NodeKind,
    SymbolInfo, TypeId, TypeKind, TypeTable, TypedConstant, TypedConstantKind,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HostModel {
    pub file: String,
    #[serde(default = "default_true")]
    pub prelude_mvc: bool,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub containing_type: Option<String>,
    #[serde(default)]
    pub generated: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,
    #[serde(default)]
    pub bodies: Vec<NodeDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AttributeDecl {
    /// Simple class name of the attribute.
    pub class: String,
    #[serde(default)]
    pub namespace: String,
    /// Parameter count of the bound constructor.
    #[serde(default)]
    pub parameters: Option<usize>,
    #[serde(default)]
    pub arguments: Vec<ConstantDecl>,
    #[serde(default)]
    pub span: Option<SourceSpan>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConstantDecl {
    #[serde(default)]
    pub kind: TypedConstantKind,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDecl {
    #[serde(flatten)]
    pub kind: NodeKindDecl,
    /// Static type of the expression.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// Symbol the expression binds to.
    #[serde(default)]
    pub symbol: Option<SymbolDecl>,
    #[serde(default)]
    pub span: Option<SourceSpan>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeKindDecl {
    Block {
        #[serde(default)]
        statements: Vec<NodeDecl>,
    },
    Return {
        #[serde(default)]
        expression: Option<Box<NodeDecl>>,
    },
    If {
        condition: Box<NodeDecl>,
        then: Box<NodeDecl>,
        #[serde(default, rename = "else")]
        otherwise: Option<Box<NodeDecl>>,
    },
    Expression {
        expression: Box<NodeDecl>,
    },
    Local {
        name: String,
        #[serde(default)]
        initializer: Option<Box<NodeDecl>>,
    },
    Call {
        callee: String,
        #[serde(default)]
        arguments: Vec<NodeDecl>,
    },
    New {
        #[serde(default)]
        arguments: Vec<NodeDecl>,
        #[serde(default)]
        initializers: Vec<NodeDecl>,
    },
    Await {
        expression: Box<NodeDecl>,
    },
    Lambda {
        body: Box<NodeDecl>,
    },
    Literal {
        text: String,
    },
    Identifier {
        name: String,
    },
    Other {
        #[serde(default)]
        label: String,
        #[serde(default)]
        children: Vec<NodeDecl>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "camelCase",
    rename_all_fields = "camelCase",
    deny_unknown_fields
)]
pub enum SymbolDecl {
    Method {
        name: String,
        #[serde(default)]
        containing_type: Option<String>,
    },
    Local {
        name: String,
    },
    Field {
        name: String,
    },
    Property {
        name: String,
    },
    Type {
        name: String,
    },
}

pub fn parse_host_model(source: &str) -> Result<CompilationUnit> {
    let model: HostModel =
        serde_json::from_str(source).context("failed to parse host model JSON")?;
    lower(model)
}

pub fn load_host_model(path: &Path) -> Result<CompilationUnit> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read host model: {}", path.display()))?;
    parse_host_model(&source)
        .with_context(|| format!("failed to load host model: {}", path.display()))
}

/// Build a `CompilationUnit` from a parsed host model.
pub fn lower(model: HostModel) -> Result<CompilationUnit> {
    let mut unit = CompilationUnit::new(model.file);
    if model.prelude_mvc {
        MvcTypes::register(&mut unit.types);
    }

    define_types(&mut unit.types, &model.types);

    for method in &model.methods {
        let symbol = lower_method(&mut unit, method)
            .with_context(|| format!("in method '{}'", method.name))?;
        unit.methods.push(symbol);
    }

    tracing::debug!(
        file = %unit.file,
        types = unit.types.len(),
        methods = unit.methods.len(),
        nodes = unit.arena.len(),
        "lowered host model"
    );
    Ok(unit)
}

/// Names first, then bases and interfaces, so declarations may refer to
/// types declared later in the list.
fn define_types(types: &mut TypeTable, decls: &[TypeDecl]) {
    let ids: Vec<TypeId> = decls
        .iter()
        .map(|decl| types.define(&decl.namespace, &decl.name, decl.kind))
        .collect();

    for (decl, &id) in decls.iter().zip(&ids) {
        if let Some(base) = &decl.base {
            let base_id = resolve_type(types, base, "base type");
            types.set_base(id, base_id);
        }
        for interface in &decl.interfaces {
            if let Some(interface_id) = resolve_type(types, interface, "interface") {
                types.add_interface(id, interface_id);
            }
        }
    }
}

/// Look up a referenced type; unknown names are logged and stay unresolved.
fn resolve_type(types: &TypeTable, name: &str, role: &str) -> Option<TypeId> {
    let resolved = types.resolve_name(name);
    if resolved.is_none() {
        tracing::warn!(type_name = name, role, "unknown type reference left unresolved");
    }
    resolved
}

fn resolve_optional(types: &TypeTable, name: Option<&str>, role: &str) -> Option<TypeId> {
    name.and_then(|name| resolve_type(types, name, role))
}

fn lower_method(unit: &mut CompilationUnit, decl: &MethodDecl) -> Result<MethodSymbol> {
    let mut method = MethodSymbol::new(&decl.name);
    method.containing_type =
        resolve_optional(&unit.types, decl.containing_type.as_deref(), "containing type");
    method.is_generated_code = decl.generated;

    for attribute in &decl.attributes {
        let mut data = lower_attribute(&mut unit.types, attribute)?;
        data.span = anchor(data.span, &unit.file);
        method.attributes.push(data);
    }
    for body in &decl.bodies {
        let root = lower_node(unit, body)?;
        method.declarations.push(root);
    }
    Ok(method)
}

fn lower_attribute(types: &mut TypeTable, decl: &AttributeDecl) -> Result<AttributeData> {
    // Attribute classes come from referenced assemblies; bind by name.
    let class = types.define(&decl.namespace, &decl.class, TypeKind::Class);
    let arguments = decl
        .arguments
        .iter()
        .map(|argument| lower_constant(types, argument))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("arguments of attribute '{}'", decl.class))?;

    Ok(AttributeData {
        class: Some(class),
        constructor_parameter_count: decl.parameters,
        arguments,
        span: decl.span.clone(),
    })
}

fn lower_constant(types: &TypeTable, decl: &ConstantDecl) -> Result<TypedConstant> {
    let mut ty = resolve_optional(types, decl.ty.as_deref(), "constant type");

    let value = match decl.kind {
        TypedConstantKind::Type => {
            let Some(name) = decl.value.as_str() else {
                bail!("typeof argument must name a type, found {}", decl.value);
            };
            if ty.is_none() {
                ty = types.lookup(&format!("{SYSTEM}.Type"));
            }
            match resolve_type(types, name, "typeof target") {
                Some(target) => ConstantValue::Type(target),
                // Unbindable `typeof`: the host would report an error constant.
                None => {
                    return Ok(TypedConstant {
                        kind: TypedConstantKind::Error,
                        ty,
                        value: ConstantValue::Null,
                    });
                }
            }
        }
        _ => constant_value(&decl.value)?,
    };

    Ok(TypedConstant {
        kind: decl.kind,
        ty,
        value,
    })
}

fn constant_value(value: &serde_json::Value) -> Result<ConstantValue> {
    use serde_json::Value;

    Ok(match value {
        Value::Null => ConstantValue::Null,
        Value::Bool(b) => ConstantValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(int) => ConstantValue::Int(int),
            None => bail!("non-integral numeric constant {n}"),
        },
        Value::String(s) => ConstantValue::String(s.clone()),
        Value::Array(_) | Value::Object(_) => bail!("unsupported constant value {value}"),
    })
}

fn lower_node(unit: &mut CompilationUnit, decl: &NodeDecl) -> Result<NodeIndex> {
    let kind = match &decl.kind {
        NodeKindDecl::Block { statements } => NodeKind::Block {
            statements: lower_all(unit, statements)?,
        },
        NodeKindDecl::Return { expression } => NodeKind::Return {
            expression: lower_boxed(unit, expression.as_deref())?,
        },
        NodeKindDecl::If {
            condition,
            then,
            otherwise,
        } => NodeKind::If {
            condition: lower_node(unit, condition)?,
            then_branch: lower_node(unit, then)?,
            else_branch: lower_boxed(unit, otherwise.as_deref())?,
        },
        NodeKindDecl::Expression { expression } => NodeKind::ExpressionStatement {
            expression: lower_node(unit, expression)?,
        },
        NodeKindDecl::Local { name, initializer } => NodeKind::LocalDeclaration {
            name: name.clone(),
            initializer: lower_boxed(unit, initializer.as_deref())?,
        },
        NodeKindDecl::Call { callee, arguments } => NodeKind::Invocation {
            callee: callee.clone(),
            arguments: lower_all(unit, arguments)?,
        },
        NodeKindDecl::New {
            arguments,
            initializers,
        } => NodeKind::ObjectCreation {
            type_name: decl.ty.clone().unwrap_or_default(),
            arguments: lower_all(unit, arguments)?,
            initializers: lower_all(unit, initializers)?,
        },
        NodeKindDecl::Await { expression } => NodeKind::Await {
            expression: lower_node(unit, expression)?,
        },
        NodeKindDecl::Lambda { body } => NodeKind::Lambda {
            body: lower_node(unit, body)?,
        },
        NodeKindDecl::Literal { text } => NodeKind::Literal { text: text.clone() },
        NodeKindDecl::Identifier { name } => NodeKind::Identifier { name: name.clone() },
        NodeKindDecl::Other { label, children } => NodeKind::Other {
            label: label.clone(),
            children: lower_all(unit, children)?,
        },
    };

    let span = anchor(decl.span.clone(), &unit.file);
    let index = unit.arena.add_with_span(kind, span);
    if let Some(ty) = resolve_optional(&unit.types, decl.ty.as_deref(), "expression type") {
        unit.semantic.record_type(index, ty);
    }
    if let Some(symbol) = decl.symbol.as_ref().and_then(|s| lower_symbol(&unit.types, s)) {
        unit.semantic.record_symbol(index, symbol);
    }
    Ok(index)
}

/// Spans without a file belong to the unit's file.
fn anchor(span: Option<SourceSpan>, file: &str) -> Option<SourceSpan> {
    span.map(|mut span| {
        if span.file.is_empty() {
            span.file = file.to_string();
        }
        span
    })
}

fn lower_all(unit: &mut CompilationUnit, decls: &[NodeDecl]) -> Result<Vec<NodeIndex>> {
    decls.iter().map(|decl| lower_node(unit, decl)).collect()
}

fn lower_boxed(unit: &mut CompilationUnit, decl: Option<&NodeDecl>) -> Result<Option<NodeIndex>> {
    decl.map(|decl| lower_node(unit, decl)).transpose()
}

/// A type symbol naming an unknown type binds to nothing.
fn lower_symbol(types: &TypeTable, decl: &SymbolDecl) -> Option<SymbolInfo> {
    Some(match decl {
        SymbolDecl::Method {
            name,
            containing_type,
        } => SymbolInfo::Method {
            name: name.clone(),
            containing_type: resolve_optional(
                types,
                containing_type.as_deref(),
                "containing type",
            ),
        },
        SymbolDecl::Local { name } => SymbolInfo::Local { name: name.clone() },
        SymbolDecl::Field { name } => SymbolInfo::Field { name: name.clone() },
        SymbolDecl::Property { name } => SymbolInfo::Property { name: name.clone() },
        SymbolDecl::Type { name } => SymbolInfo::Type(resolve_type(types, name, "type symbol")?),
    })
}
