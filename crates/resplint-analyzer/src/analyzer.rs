//! Analyzer entry points.
//!
//! `analyze_method` is the per-method callback a host invokes; it holds no
//! state between calls, so hosts may run it for different methods on
//! different threads. `analyze_unit` runs it over every method of a
//! compilation unit.

use resplint_common::{CancellationToken, Diagnostic, DiagnosticCategory, format_message};
use resplint_model::{CompilationUnit, MethodSymbol, SemanticModel, SyntaxArena, TypeDatabase};
use tracing::{debug, debug_span, info_span};

use crate::declarations::{Declaration, extract_declarations};
use crate::options::AnalyzerOptions;
use crate::redundancy::find_redundant;
use crate::return_sites::collect_return_sites;
use crate::rules::{
    REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE, RuleDescriptor, attribute_display_name,
};

/// Everything one analysis reads. Borrowed, never mutated.
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub db: &'a dyn TypeDatabase,
    pub arena: &'a SyntaxArena,
    pub semantic: &'a SemanticModel,
    pub options: &'a AnalyzerOptions,
    pub cancel: &'a CancellationToken,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        unit: &'a CompilationUnit,
        options: &'a AnalyzerOptions,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            db: &unit.types,
            arena: &unit.arena,
            semantic: &unit.semantic,
            options,
            cancel,
        }
    }
}

/// Diagnostics for the orphaned response declarations of `method`.
///
/// Returns nothing when the rule is off, the method is generated code (unless
/// enabled), the method has no declarations, or the analysis was cancelled.
pub fn analyze_method(ctx: &AnalysisContext<'_>, method: &MethodSymbol) -> Vec<Diagnostic> {
    let rule = &REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE;
    let Some(category) = ctx.options.category_for(rule) else {
        return Vec::new();
    };
    if method.is_generated_code && !ctx.options.analyze_generated_code {
        return Vec::new();
    }

    let _span = debug_span!("analyze_method", method = %method.name).entered();

    let declarations = extract_declarations(ctx.db, method, ctx.options);
    if declarations.is_empty() {
        return Vec::new();
    }

    let sites = match collect_return_sites(ctx.arena, ctx.semantic, method, ctx.cancel) {
        Ok(sites) => sites,
        Err(cancelled) => {
            debug!(%cancelled, "dropping results");
            return Vec::new();
        }
    };
    debug!(
        declarations = declarations.len(),
        sites = sites.len(),
        "collected"
    );

    find_redundant(ctx.db, &declarations, &sites)
        .into_iter()
        .map(|declaration| redundant_declaration(rule, category, declaration))
        .collect()
}

/// Run `analyze_method` over every method of `unit`, in method order.
/// A cancelled run yields no diagnostics.
pub fn analyze_unit(
    unit: &CompilationUnit,
    options: &AnalyzerOptions,
    cancel: &CancellationToken,
) -> Vec<Diagnostic> {
    let _span =
        info_span!("analyze_unit", file = %unit.file, methods = unit.methods.len()).entered();
    let ctx = AnalysisContext::new(unit, options, cancel);

    let mut diagnostics = Vec::new();
    for method in &unit.methods {
        if cancel.is_cancelled() {
            return Vec::new();
        }
        diagnostics.extend(analyze_method(&ctx, method));
    }
    if cancel.is_cancelled() {
        return Vec::new();
    }
    diagnostics
}

fn redundant_declaration(
    rule: &RuleDescriptor,
    category: DiagnosticCategory,
    declaration: &Declaration,
) -> Diagnostic {
    let message = format_message(
        rule.message,
        &[attribute_display_name(&declaration.attribute_name)],
    );
    Diagnostic::new(rule.code, category, declaration.location.as_ref(), message).with_arguments(
        vec![
            declaration.attribute_name.clone(),
            declaration.status_code.to_string(),
        ],
    )
}
