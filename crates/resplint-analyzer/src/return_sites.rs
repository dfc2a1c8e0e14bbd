//! Distinct responses a method body can produce.
//!
//! Every `return expr;` under any declaration of the method is a return
//! site. Reachability is not considered: a `return` after another `return`
//! still counts. Sites are deduplicated by `(produced_type, payload_type)`
//! and kept in first-seen order.

use indexmap::IndexSet;
use resplint_common::limits::CANCELLATION_CHECK_INTERVAL;
use resplint_common::{CancellationToken, Cancelled};
use resplint_model::{MethodSymbol, NodeIndex, NodeKind, SemanticModel, SyntaxArena, TypeId};
use rustc_hash::FxBuildHasher;

/// One distinct response produced by the method body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReturnSite {
    /// Static type of the returned expression.
    pub produced_type: TypeId,
    /// Static type of the first argument when the returned expression is a
    /// method call (`Ok(value)`); the call is taken to build a response
    /// carrying that argument.
    pub payload_type: Option<TypeId>,
}

/// Collect the distinct return sites of `method`.
///
/// Bare `return;` statements and returns whose expression type the host
/// could not resolve are left out.
pub fn collect_return_sites(
    arena: &SyntaxArena,
    semantic: &SemanticModel,
    method: &MethodSymbol,
    cancel: &CancellationToken,
) -> Result<Vec<ReturnSite>, Cancelled> {
    let mut sites: IndexSet<ReturnSite, FxBuildHasher> = IndexSet::default();
    let mut visited = 0usize;

    for &root in &method.declarations {
        for (_, node) in arena.descendants(root) {
            visited += 1;
            if visited % CANCELLATION_CHECK_INTERVAL == 0 {
                cancel.check()?;
            }

            let NodeKind::Return {
                expression: Some(expression),
            } = node.kind
            else {
                continue;
            };
            let Some(produced_type) = semantic.type_of(expression) else {
                tracing::trace!(?expression, "return expression has no resolved type");
                continue;
            };
            let payload_type = payload_type_of(arena, semantic, expression);
            sites.insert(ReturnSite {
                produced_type,
                payload_type,
            });
        }
    }

    cancel.check()?;
    Ok(sites.into_iter().collect())
}

/// Type of the first argument of a method invocation.
fn payload_type_of(
    arena: &SyntaxArena,
    semantic: &SemanticModel,
    expression: NodeIndex,
) -> Option<TypeId> {
    let node = arena.get(expression)?;
    let NodeKind::Invocation { arguments, .. } = &node.kind else {
        return None;
    };
    if !semantic.symbol_of(expression)?.is_method() {
        return None;
    }
    let &first = arguments.first()?;
    semantic.type_of(first)
}
