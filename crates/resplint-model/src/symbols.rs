//! Method symbols and attribute applications.

use resplint_common::SourceSpan;
use serde::{Deserialize, Serialize};

use crate::syntax::NodeIndex;
use crate::types::TypeId;

/// How an attribute argument constant was written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypedConstantKind {
    /// Numeric, string or boolean literal (or a `const` of such a type).
    #[default]
    Primitive,
    /// A member of an enum type.
    Enum,
    /// A `typeof(T)` expression.
    Type,
    Array,
    /// The host could not evaluate the argument.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    Type(TypeId),
}

/// A constant attribute argument together with its static type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedConstant {
    pub kind: TypedConstantKind,
    /// Static type of the argument (`System.Int32`, the enum type,
    /// `System.Type`, ...); `None` when unresolved.
    pub ty: Option<TypeId>,
    pub value: ConstantValue,
}

impl TypedConstant {
    pub fn primitive(ty: Option<TypeId>, value: ConstantValue) -> Self {
        Self {
            kind: TypedConstantKind::Primitive,
            ty,
            value,
        }
    }

    pub fn enum_member(enum_type: TypeId, value: i64) -> Self {
        Self {
            kind: TypedConstantKind::Enum,
            ty: Some(enum_type),
            value: ConstantValue::Int(value),
        }
    }

    /// `typeof(target)`; `system_type` is the type of the expression itself.
    pub fn type_of(system_type: Option<TypeId>, target: TypeId) -> Self {
        Self {
            kind: TypedConstantKind::Type,
            ty: system_type,
            value: ConstantValue::Type(target),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            ConstantValue::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<TypeId> {
        match self.value {
            ConstantValue::Type(ty) => Some(ty),
            _ => None,
        }
    }
}

/// One attribute applied to a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeData {
    /// Resolved attribute class; `None` when the host could not bind it.
    pub class: Option<TypeId>,
    /// Parameter count of the constructor the application binds to, if known.
    pub constructor_parameter_count: Option<usize>,
    /// Positional constructor arguments in source order.
    pub arguments: Vec<TypedConstant>,
    /// Span of the application syntax (`ProducesResponseType(...)`).
    pub span: Option<SourceSpan>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSymbol {
    pub name: String,
    pub containing_type: Option<TypeId>,
    pub attributes: Vec<AttributeData>,
    /// Root node of every syntactic declaration of the method. Partial
    /// methods have more than one.
    pub declarations: Vec<NodeIndex>,
    /// Set by hosts for compiler- or tool-generated code.
    pub is_generated_code: bool,
}

impl MethodSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            containing_type: None,
            attributes: Vec::new(),
            declarations: Vec::new(),
            is_generated_code: false,
        }
    }
}
