//! Host semantic model for the resplint analyzer.
//!
//! The analyzer does not parse or bind source code. Everything it knows about
//! a program comes through the types in this crate, which a host fills in:
//! - `types` - Interned type table with base-type and interface queries
//! - `syntax` - Arena of method-body syntax nodes
//! - `semantic` - Static types and call targets of expressions
//! - `symbols` - Method symbols and their attribute applications
//! - `well_known` - Prelude of ASP.NET Core MVC result types
//! - `unit` - One compilation unit bundling all of the above

pub mod semantic;
pub mod symbols;
pub mod syntax;
pub mod types;
pub mod unit;
pub mod well_known;

pub use semantic::{SemanticModel, SymbolInfo};
pub use symbols::{AttributeData, ConstantValue, MethodSymbol, TypedConstant, TypedConstantKind};
pub use syntax::{Node, NodeIndex, NodeKind, SyntaxArena};
pub use types::{TypeData, TypeDatabase, TypeId, TypeKind, TypeTable};
pub use unit::CompilationUnit;
pub use well_known::MvcTypes;
