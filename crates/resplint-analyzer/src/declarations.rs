//! Response declarations read off a method's attributes.

use resplint_common::SourceSpan;
use resplint_model::{
    AttributeData, MethodSymbol, TypeDatabase, TypeId, TypedConstant, TypedConstantKind,
};

use crate::options::AnalyzerOptions;

/// How the status code argument was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusCodeForm {
    /// An `int` literal or constant (`200`, `StatusCodes.Status200OK`).
    Integer,
    /// A member of an enum type (`HttpStatusCode.OK`).
    Enum,
}

/// One response declaration: "this method can produce `status_code`,
/// optionally carrying a `payload_type`".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub status_code: i32,
    pub form: StatusCodeForm,
    pub payload_type: Option<TypeId>,
    /// Simple name of the attribute class, e.g. `ProducesResponseTypeAttribute`.
    pub attribute_name: String,
    pub location: Option<SourceSpan>,
}

/// True if `attribute` is an application of the configured response
/// declaration attribute class.
pub fn is_response_declaration(
    db: &dyn TypeDatabase,
    attribute: &AttributeData,
    options: &AnalyzerOptions,
) -> bool {
    let Some(class) = attribute.class else {
        return false;
    };
    db.type_name(class) == Some(options.attribute_name.as_str())
        && db.type_namespace(class) == Some(options.attribute_namespace.as_str())
}

/// Normalized declarations of `method`, in attribute order.
///
/// Applications without an integer status code argument are skipped; they
/// assert nothing that can be checked.
pub fn extract_declarations(
    db: &dyn TypeDatabase,
    method: &MethodSymbol,
    options: &AnalyzerOptions,
) -> Vec<Declaration> {
    method
        .attributes
        .iter()
        .filter(|attribute| is_response_declaration(db, attribute, options))
        .filter_map(|attribute| read_declaration(db, attribute))
        .collect()
}

fn read_declaration(db: &dyn TypeDatabase, attribute: &AttributeData) -> Option<Declaration> {
    if attribute.arguments.is_empty() {
        return None;
    }
    let Some((status_code, form)) = attribute
        .arguments
        .iter()
        .find_map(|argument| status_code_argument(db, argument))
    else {
        tracing::trace!(span = ?attribute.span, "response declaration without status code");
        return None;
    };

    // `(Type type, int statusCode)` is the only two-parameter shape.
    let parameter_count = attribute
        .constructor_parameter_count
        .unwrap_or(attribute.arguments.len());
    let payload_type = if parameter_count == 2 {
        attribute
            .arguments
            .iter()
            .filter(|argument| argument.kind == TypedConstantKind::Type)
            .find_map(TypedConstant::as_type)
    } else {
        None
    };

    let attribute_name = attribute
        .class
        .and_then(|class| db.type_name(class))
        .unwrap_or_default()
        .to_string();

    Some(Declaration {
        status_code,
        form,
        payload_type,
        attribute_name,
        location: attribute.span.clone(),
    })
}

fn status_code_argument(
    db: &dyn TypeDatabase,
    argument: &TypedConstant,
) -> Option<(i32, StatusCodeForm)> {
    let value = i32::try_from(argument.as_int()?).ok()?;
    match argument.kind {
        TypedConstantKind::Primitive if is_int32(db, argument.ty) => {
            Some((value, StatusCodeForm::Integer))
        }
        TypedConstantKind::Enum => Some((value, StatusCodeForm::Enum)),
        _ => None,
    }
}

fn is_int32(db: &dyn TypeDatabase, ty: Option<TypeId>) -> bool {
    ty.is_some_and(|ty| {
        db.type_name(ty) == Some("Int32") && db.type_namespace(ty) == Some("System")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use resplint_model::{ConstantValue, MvcTypes, TypeTable};

    fn attribute(mvc: &MvcTypes, arguments: Vec<TypedConstant>, params: usize) -> AttributeData {
        AttributeData {
            class: Some(mvc.produces_response_type_attribute),
            constructor_parameter_count: Some(params),
            arguments,
            span: Some(SourceSpan::new("C.cs", 10, 40)),
        }
    }

    fn int(mvc: &MvcTypes, value: i64) -> TypedConstant {
        TypedConstant::primitive(Some(mvc.int32), ConstantValue::Int(value))
    }

    #[test]
    fn reads_status_code_and_payload() {
        let mut table = TypeTable::new();
        let mvc = MvcTypes::register(&mut table);
        let mut method = MethodSymbol::new("Get");
        method.attributes.push(attribute(
            &mvc,
            vec![
                TypedConstant::type_of(Some(mvc.system_type), mvc.string),
                int(&mvc, 200),
            ],
            2,
        ));
        method.attributes.push(attribute(&mvc, vec![int(&mvc, 404)], 1));

        let declarations = extract_declarations(&table, &method, &AnalyzerOptions::default());
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].status_code, 200);
        assert_eq!(declarations[0].payload_type, Some(mvc.string));
        assert_eq!(declarations[0].form, StatusCodeForm::Integer);
        assert_eq!(declarations[0].attribute_name, "ProducesResponseTypeAttribute");
        assert_eq!(declarations[1].status_code, 404);
        assert_eq!(declarations[1].payload_type, None);
    }

    #[test]
    fn skips_applications_without_int_status_code() {
        let mut table = TypeTable::new();
        let mvc = MvcTypes::register(&mut table);
        let mut method = MethodSymbol::new("Get");
        method.attributes.push(attribute(&mvc, vec![], 0));
        method.attributes.push(attribute(
            &mvc,
            vec![TypedConstant::type_of(Some(mvc.system_type), mvc.string)],
            1,
        ));
        method.attributes.push(attribute(
            &mvc,
            vec![TypedConstant::primitive(
                Some(mvc.string),
                ConstantValue::String("200".into()),
            )],
            1,
        ));
        // An int literal without a resolved System.Int32 type is not trusted.
        method.attributes.push(attribute(
            &mvc,
            vec![TypedConstant::primitive(None, ConstantValue::Int(200))],
            1,
        ));
        assert!(extract_declarations(&table, &method, &AnalyzerOptions::default()).is_empty());
    }

    #[test]
    fn enum_constants_are_read_as_enum_form() {
        let mut table = TypeTable::new();
        let mvc = MvcTypes::register(&mut table);
        let mut method = MethodSymbol::new("Get");
        method.attributes.push(attribute(
            &mvc,
            vec![TypedConstant::enum_member(mvc.http_status_code, 404)],
            1,
        ));
        let declarations = extract_declarations(&table, &method, &AnalyzerOptions::default());
        assert_eq!(declarations[0].status_code, 404);
        assert_eq!(declarations[0].form, StatusCodeForm::Enum);
    }

    #[test]
    fn ignores_other_attribute_classes() {
        let mut table = TypeTable::new();
        let mvc = MvcTypes::register(&mut table);
        let lookalike = table.define_class("My.Mvc", "ProducesResponseTypeAttribute", None);
        let mut method = MethodSymbol::new("Get");
        let mut foreign = attribute(&mvc, vec![int(&mvc, 200)], 1);
        foreign.class = Some(lookalike);
        method.attributes.push(foreign);
        let mut unbound = attribute(&mvc, vec![int(&mvc, 200)], 1);
        unbound.class = None;
        method.attributes.push(unbound);
        assert!(extract_declarations(&table, &method, &AnalyzerOptions::default()).is_empty());
    }

    #[test]
    fn payload_only_read_for_two_parameter_constructor() {
        let mut table = TypeTable::new();
        let mvc = MvcTypes::register(&mut table);
        let mut method = MethodSymbol::new("Get");
        // (Type, int, string contentType)
        method.attributes.push(attribute(
            &mvc,
            vec![
                TypedConstant::type_of(Some(mvc.system_type), mvc.string),
                int(&mvc, 200),
                TypedConstant::primitive(
                    Some(mvc.string),
                    ConstantValue::String("text/plain".into()),
                ),
            ],
            3,
        ));
        let declarations = extract_declarations(&table, &method, &AnalyzerOptions::default());
        assert_eq!(declarations[0].payload_type, None);
    }
}
