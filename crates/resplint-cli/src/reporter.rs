use colored::Colorize;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::Path;

use resplint_common::{Diagnostic, DiagnosticCategory};

pub struct Reporter {
    color: bool,
    sources: FxHashMap<String, Option<String>>,
}

/// Counts per category, for the trailing summary and the exit status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
    pub files: usize,
}

impl Summary {
    pub fn from_diagnostics(diagnostics: &[Diagnostic], files: usize) -> Self {
        let mut summary = Summary {
            files,
            ..Summary::default()
        };
        for diagnostic in diagnostics {
            match diagnostic.category {
                DiagnosticCategory::Error => summary.errors += 1,
                DiagnosticCategory::Warning => summary.warnings += 1,
                DiagnosticCategory::Suggestion => summary.suggestions += 1,
                DiagnosticCategory::Message => {}
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.suggestions
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    diagnostics: &'a [Diagnostic],
    summary: Summary,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: FxHashMap::default(),
        }
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn render_json(&self, diagnostics: &[Diagnostic], summary: Summary) -> String {
        let report = JsonReport {
            diagnostics,
            summary,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| String::from("{}"))
    }

    pub fn render_summary(&self, summary: &Summary) -> String {
        let files = plural(summary.files, "file");
        if summary.total() == 0 {
            return format!("No redundant response declarations in {files}.");
        }

        let mut parts = Vec::new();
        if summary.errors > 0 {
            parts.push(self.paint(plural(summary.errors, "error"), DiagnosticCategory::Error));
        }
        if summary.warnings > 0 {
            parts.push(self.paint(
                plural(summary.warnings, "warning"),
                DiagnosticCategory::Warning,
            ));
        }
        if summary.suggestions > 0 {
            parts.push(self.paint(
                plural(summary.suggestions, "suggestion"),
                DiagnosticCategory::Suggestion,
            ));
        }
        format!("Found {} in {files}.", parts.join(", "))
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        if diagnostic.file.is_empty() {
            output.push_str("<unknown>");
        } else {
            output.push_str(&diagnostic.file);
            if let Some((line, column)) = self.position_for(diagnostic) {
                output.push_str(&format!(":{line}:{column}"));
            }
        }

        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push(' ');
        output.push_str(&self.format_code(diagnostic.code));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) = self.format_snippet(diagnostic) {
            output.push_str(&snippet);
        }
        output
    }

    /// Reported line/column, or computed from the source when it is readable.
    fn position_for(&mut self, diagnostic: &Diagnostic) -> Option<(u32, u32)> {
        if let (Some(line), Some(column)) = (diagnostic.line, diagnostic.column) {
            return Some((line, column));
        }
        let source = self.source(&diagnostic.file)?;
        Some(offset_to_position(source, diagnostic.start))
    }

    /// The declaration's source line with its span underlined.
    ///   12   [ProducesResponseType(404)]
    ///         ~~~~~~~~~~~~~~~~~~~~~~~~~
    fn format_snippet(&mut self, diagnostic: &Diagnostic) -> Option<String> {
        if diagnostic.length == 0 {
            return None;
        }
        let (line_num, column) = self.position_for(diagnostic)?;
        let color = self.color;
        let source = self.source(&diagnostic.file)?;
        let line_text = source.lines().nth(line_num.checked_sub(1)? as usize)?;

        let mut underline = String::new();
        let start = column.saturating_sub(1) as usize;
        for (i, ch) in line_text.chars().enumerate() {
            if i < start {
                underline.push(if ch == '\t' { '\t' } else { ' ' });
            } else if i < start + diagnostic.length as usize {
                underline.push('~');
            } else {
                break;
            }
        }
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline = if color {
            underline.yellow().to_string()
        } else {
            underline
        };
        Some(format!("\n  {line_num:>3}   {line_text}\n        {underline}"))
    }

    fn source(&mut self, file: &str) -> Option<&str> {
        if file.is_empty() {
            return None;
        }
        self.sources
            .entry(file.to_string())
            .or_insert_with(|| std::fs::read_to_string(Path::new(file)).ok())
            .as_deref()
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        self.paint(category.as_str().to_string(), category)
    }

    fn paint(&self, label: String, category: DiagnosticCategory) -> String {
        if !self.color {
            return label;
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: &str) -> String {
        if self.color {
            code.bright_blue().to_string()
        } else {
            code.to_string()
        }
    }
}

/// 1-based line and column of a byte offset.
fn offset_to_position(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let mut line = 1u32;
    let mut line_start = 0usize;
    for (index, byte) in source.bytes().enumerate().take(offset) {
        if byte == b'\n' {
            line += 1;
            line_start = index + 1;
        }
    }
    let column = source
        .get(line_start..offset)
        .map_or(offset - line_start, |text| text.chars().count());
    (line, column as u32 + 1)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
