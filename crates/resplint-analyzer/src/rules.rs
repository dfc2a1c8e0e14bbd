//! Rule registry.
//!
//! Every diagnostic the analyzer can emit is described by a static
//! `RuleDescriptor`: its code, category, default severity, and message
//! template.

use resplint_common::DiagnosticCategory;

/// Rule codes.
pub mod rule_codes {
    pub const REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE: &str = "LA0005";
}

/// Rule categories.
pub mod categories {
    pub const DESIGN: &str = "Design";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub code: &'static str,
    pub title: &'static str,
    /// Message template; `{0}` is the attribute display name.
    pub message: &'static str,
    pub category: &'static str,
    pub default_severity: DiagnosticCategory,
    pub enabled_by_default: bool,
}

pub static REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE: RuleDescriptor = RuleDescriptor {
    code: rule_codes::REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE,
    title: "Redundant response declaration",
    message: "Redundant {0} attribute",
    category: categories::DESIGN,
    default_severity: DiagnosticCategory::Warning,
    enabled_by_default: true,
};

pub static ALL_RULES: &[&RuleDescriptor] = &[&REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE];

pub fn get_rule(code: &str) -> Option<&'static RuleDescriptor> {
    ALL_RULES.iter().copied().find(|rule| rule.code == code)
}

/// Attribute class name as written at the application site:
/// `ProducesResponseTypeAttribute` → `ProducesResponseType`.
pub fn attribute_display_name(class_name: &str) -> &str {
    match class_name.strip_suffix("Attribute") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => class_name,
    }
}
