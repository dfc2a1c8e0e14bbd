//! Shared fixture for analyzer integration tests.
//!
//! Builds a `CompilationUnit` the way a host would after binding a
//! controller: MVC prelude types, one syntax tree per method declaration,
//! expression types and call targets in the semantic table.

#![allow(dead_code)]

use resplint_analyzer::{AnalyzerOptions, analyze_unit};
use resplint_common::{CancellationToken, Diagnostic, SourceSpan};
use resplint_model::{
    AttributeData, CompilationUnit, ConstantValue, MethodSymbol, MvcTypes, NodeIndex, NodeKind,
    SymbolInfo, TypeId, TypedConstant,
};

pub const FILE: &str = "TestController.cs";

pub struct Fixture {
    pub unit: CompilationUnit,
    pub mvc: MvcTypes,
    next_line: u32,
}

impl Fixture {
    pub fn new() -> Self {
        let (unit, mvc) = CompilationUnit::with_mvc_prelude(FILE);
        Self {
            unit,
            mvc,
            next_line: 1,
        }
    }

    pub fn class(&mut self, name: &str, base: TypeId) -> TypeId {
        self.unit.types.define_class("App", name, Some(base))
    }

    pub fn interface(&mut self, name: &str) -> TypeId {
        self.unit.types.define_interface("App", name)
    }

    pub fn implement(&mut self, class: TypeId, interface: TypeId) {
        self.unit.types.add_interface(class, interface);
    }

    pub fn method(&mut self, name: &str) -> MethodBuilder<'_> {
        MethodBuilder {
            method: MethodSymbol::new(name),
            statements: Vec::new(),
            fx: self,
        }
    }

    pub fn analyze(&self) -> Vec<Diagnostic> {
        self.analyze_with(&AnalyzerOptions::default())
    }

    pub fn analyze_with(&self, options: &AnalyzerOptions) -> Vec<Diagnostic> {
        analyze_unit(&self.unit, options, &CancellationToken::new())
    }

    fn next_span(&mut self) -> SourceSpan {
        let line = self.next_line;
        self.next_line += 1;
        SourceSpan::new(FILE, line * 100, 40).with_line_column(line, 6)
    }
}

pub struct MethodBuilder<'f> {
    fx: &'f mut Fixture,
    method: MethodSymbol,
    statements: Vec<NodeIndex>,
}

impl MethodBuilder<'_> {
    fn attribute(mut self, arguments: Vec<TypedConstant>, parameters: usize) -> Self {
        let span = self.fx.next_span();
        self.method.attributes.push(AttributeData {
            class: Some(self.fx.mvc.produces_response_type_attribute),
            constructor_parameter_count: Some(parameters),
            arguments,
            span: Some(span),
        });
        self
    }

    /// `[ProducesResponseType(code)]`
    pub fn produces(self, code: i64) -> Self {
        let int32 = self.fx.mvc.int32;
        self.attribute(
            vec![TypedConstant::primitive(Some(int32), ConstantValue::Int(code))],
            1,
        )
    }

    /// `[ProducesResponseType(typeof(payload), code)]`
    pub fn produces_typed(self, payload: TypeId, code: i64) -> Self {
        let mvc = self.fx.mvc;
        self.attribute(
            vec![
                TypedConstant::type_of(Some(mvc.system_type), payload),
                TypedConstant::primitive(Some(mvc.int32), ConstantValue::Int(code)),
            ],
            2,
        )
    }

    /// `[ProducesResponseType((HttpStatusCode)code)]`
    pub fn produces_enum(self, code: i64) -> Self {
        let enum_type = self.fx.mvc.http_status_code;
        self.attribute(vec![TypedConstant::enum_member(enum_type, code)], 1)
    }

    /// Some unrelated attribute (`[HttpGet]`).
    pub fn http_get(mut self) -> Self {
        let http_get = self
            .fx
            .unit
            .types
            .define_class("Microsoft.AspNetCore.Mvc", "HttpGetAttribute", None);
        self.method.attributes.push(AttributeData {
            class: Some(http_get),
            constructor_parameter_count: Some(0),
            arguments: Vec::new(),
            span: None,
        });
        self
    }

    /// `return callee(arg);` where the call is typed `result`.
    pub fn returns_call(mut self, callee: &str, result: TypeId, arg: Option<TypeId>) -> Self {
        let unit = &mut self.fx.unit;
        let mut arguments = Vec::new();
        if let Some(arg_type) = arg {
            let value = unit.arena.identifier("value");
            unit.semantic.record_type(value, arg_type);
            arguments.push(value);
        }
        let call = unit.arena.invocation(callee, arguments);
        unit.semantic.record_type(call, result);
        unit.semantic.record_symbol(
            call,
            SymbolInfo::Method {
                name: callee.to_string(),
                containing_type: Some(self.fx.mvc.controller_base),
            },
        );
        let ret = unit.arena.ret(Some(call));
        self.statements.push(ret);
        self
    }

    /// `return new T(arg);`
    pub fn returns_new(mut self, result: TypeId, arg: Option<TypeId>) -> Self {
        let unit = &mut self.fx.unit;
        let mut arguments = Vec::new();
        if let Some(arg_type) = arg {
            let value = unit.arena.identifier("value");
            unit.semantic.record_type(value, arg_type);
            arguments.push(value);
        }
        let type_name = unit
            .types
            .get(result)
            .map(|data| data.name.clone())
            .unwrap_or_default();
        let creation = unit.arena.add(NodeKind::ObjectCreation {
            type_name,
            arguments,
            initializers: Vec::new(),
        });
        unit.semantic.record_type(creation, result);
        let ret = unit.arena.ret(Some(creation));
        self.statements.push(ret);
        self
    }

    /// `return;`
    pub fn returns_nothing(mut self) -> Self {
        let ret = self.fx.unit.arena.ret(None);
        self.statements.push(ret);
        self
    }

    /// Close the current declaration and start another one (partial method).
    pub fn next_part(mut self) -> Self {
        let statements = std::mem::take(&mut self.statements);
        let body = self.fx.unit.arena.block(statements);
        self.method.declarations.push(body);
        self
    }

    pub fn generated(mut self) -> Self {
        self.method.is_generated_code = true;
        self
    }

    pub fn build(mut self) -> usize {
        if !self.statements.is_empty() || self.method.declarations.is_empty() {
            self = self.next_part();
        }
        self.fx.unit.methods.push(self.method);
        self.fx.unit.methods.len() - 1
    }
}

/// Status codes (second message argument) of `diagnostics`, in order.
pub fn flagged_codes(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|diag| diag.arguments[1].clone())
        .collect()
}

/// Lines of `diagnostics`, in order.
pub fn flagged_lines(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().filter_map(|diag| diag.line).collect()
}
