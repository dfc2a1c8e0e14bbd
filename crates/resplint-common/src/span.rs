//! Source location of a syntax element as reported by the host.

use serde::{Deserialize, Serialize};

/// A byte range in a source file, optionally with its 1-based line/column.
///
/// The analyzer never reads source text; spans are opaque anchors supplied by
/// the host and copied onto diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    #[serde(default)]
    pub file: String,
    pub start: u32,
    pub length: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl SourceSpan {
    pub fn new(file: impl Into<String>, start: u32, length: u32) -> Self {
        Self {
            file: file.into(),
            start,
            length,
            line: None,
            column: None,
        }
    }

    #[must_use]
    pub fn with_line_column(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Exclusive end offset.
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }
}
