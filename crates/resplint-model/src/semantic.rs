//! Semantic side table for a syntax arena.
//!
//! Records what a host's binder/checker resolved for individual expression
//! nodes: the static type of the expression and, for names and invocations,
//! the symbol they refer to. Nodes absent from the table are unresolved.

use rustc_hash::FxHashMap;

use crate::syntax::NodeIndex;
use crate::types::TypeId;

/// Symbol an expression node resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolInfo {
    Method {
        name: String,
        containing_type: Option<TypeId>,
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
    Type(TypeId),
}

impl SymbolInfo {
    pub fn is_method(&self) -> bool {
        matches!(self, Self::Method { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct SemanticModel {
    expression_types: FxHashMap<NodeIndex, TypeId>,
    symbols: FxHashMap<NodeIndex, SymbolInfo>,
}

impl SemanticModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_type(&mut self, node: NodeIndex, ty: TypeId) {
        self.expression_types.insert(node, ty);
    }

    pub fn record_symbol(&mut self, node: NodeIndex, symbol: SymbolInfo) {
        self.symbols.insert(node, symbol);
    }

    /// Static type of an expression, if the host resolved one.
    pub fn type_of(&self, node: NodeIndex) -> Option<TypeId> {
        self.expression_types.get(&node).copied()
    }

    pub fn symbol_of(&self, node: NodeIndex) -> Option<&SymbolInfo> {
        self.symbols.get(&node)
    }
}
