//! Analyzer options.

use resplint_common::DiagnosticCategory;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::RuleDescriptor;

pub const DEFAULT_ATTRIBUTE_NAME: &str = "ProducesResponseTypeAttribute";
pub const DEFAULT_ATTRIBUTE_NAMESPACE: &str = "Microsoft.AspNetCore.Mvc";

/// Configured severity of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Off,
    Suggestion,
    Warning,
    Error,
}

impl RuleSeverity {
    /// `None` for `Off`.
    pub const fn category(self) -> Option<DiagnosticCategory> {
        match self {
            Self::Off => None,
            Self::Suggestion => Some(DiagnosticCategory::Suggestion),
            Self::Warning => Some(DiagnosticCategory::Warning),
            Self::Error => Some(DiagnosticCategory::Error),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Simple name of the response declaration attribute class.
    pub attribute_name: String,
    /// Namespace the attribute class must live in.
    pub attribute_namespace: String,
    /// Analyze methods the host marks as generated code.
    pub analyze_generated_code: bool,
    /// Per-rule severity overrides, keyed by rule code.
    pub rule_severities: FxHashMap<String, RuleSeverity>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            attribute_name: DEFAULT_ATTRIBUTE_NAME.to_string(),
            attribute_namespace: DEFAULT_ATTRIBUTE_NAMESPACE.to_string(),
            analyze_generated_code: false,
            rule_severities: FxHashMap::default(),
        }
    }
}

impl AnalyzerOptions {
    /// Effective category of `rule`; `None` when the rule is turned off.
    pub fn category_for(&self, rule: &RuleDescriptor) -> Option<DiagnosticCategory> {
        match self.rule_severities.get(rule.code) {
            Some(severity) => severity.category(),
            None if rule.enabled_by_default => Some(rule.default_severity),
            None => None,
        }
    }

    pub fn set_severity(&mut self, code: &str, severity: RuleSeverity) {
        self.rule_severities.insert(code.to_string(), severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE as RULE;

    #[test]
    fn default_severity_comes_from_rule() {
        let options = AnalyzerOptions::default();
        assert_eq!(options.category_for(&RULE), Some(DiagnosticCategory::Warning));
    }

    #[test]
    fn overrides_win() {
        let mut options = AnalyzerOptions::default();
        options.set_severity(RULE.code, RuleSeverity::Error);
        assert_eq!(options.category_for(&RULE), Some(DiagnosticCategory::Error));
        options.set_severity(RULE.code, RuleSeverity::Off);
        assert_eq!(options.category_for(&RULE), None);
    }
}
