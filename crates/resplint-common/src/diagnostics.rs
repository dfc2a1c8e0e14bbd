//! Diagnostic types produced by analyzer rules.
//!
//! A diagnostic is the only thing the analyzer hands back to its host: one
//! record per finding, anchored at a source span, carrying the rule code,
//! severity, rendered message, and the raw message arguments.

use serde::Serialize;
use std::fmt;

use crate::span::SourceSpan;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Suggestion => "suggestion",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Rule identifier, e.g. `LA0005`.
    pub code: &'static str,
    pub category: DiagnosticCategory,
    pub file: String,
    pub start: u32,
    pub length: u32,
    /// 1-based line of `start`, when the host knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 1-based column of `start`, when the host knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub message_text: String,
    /// Raw message arguments in template order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic. A missing span yields a location-less diagnostic
    /// (empty file, zero offsets).
    #[must_use]
    pub fn new(
        code: &'static str,
        category: DiagnosticCategory,
        span: Option<&SourceSpan>,
        message: String,
    ) -> Self {
        let (file, start, length, line, column) = match span {
            Some(span) => (
                span.file.clone(),
                span.start,
                span.length,
                span.line,
                span.column,
            ),
            None => (String::new(), 0, 0, None, None),
        };
        Self {
            code,
            category,
            file,
            start,
            length,
            line,
            column,
            message_text: message,
            arguments: Vec::new(),
        }
    }

    /// Attach the raw message arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<String>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Override the category (used for configured severities).
    #[must_use]
    pub const fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    pub fn has_location(&self) -> bool {
        !self.file.is_empty()
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
