//! A compilation unit: everything the host resolved for one source file.

use crate::semantic::SemanticModel;
use crate::symbols::MethodSymbol;
use crate::syntax::SyntaxArena;
use crate::types::TypeTable;
use crate::well_known::MvcTypes;

#[derive(Clone, Debug, Default)]
pub struct CompilationUnit {
    pub file: String,
    pub types: TypeTable,
    pub arena: SyntaxArena,
    pub semantic: SemanticModel,
    pub methods: Vec<MethodSymbol>,
}

impl CompilationUnit {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// A unit whose type table already holds the MVC prelude.
    pub fn with_mvc_prelude(file: impl Into<String>) -> (Self, MvcTypes) {
        let mut unit = Self::new(file);
        let mvc = MvcTypes::register(&mut unit.types);
        (unit, mvc)
    }
}
