//! resplint: find response declarations no return path can produce.
//!
//! A web-API handler can declare the responses it produces
//! (`[ProducesResponseType(typeof(Book), 200)]`). When no `return` in the
//! handler can produce a declared status code (and payload type), the
//! declaration is redundant and documents a response that never happens.
//!
//! The workspace is split into:
//! - [`common`] - diagnostics, spans, limits, cancellation
//! - [`model`] - the host model the analyzer reads (types, syntax, symbols)
//! - [`analyzer`] - declaration extraction, return-site collection and the
//!   redundancy decision
//!
//! The `resplint-cli` crate builds a command-line driver on top of these.

pub use resplint_analyzer as analyzer;
pub use resplint_common as common;
pub use resplint_model as model;

pub use resplint_analyzer::{AnalyzerOptions, RuleSeverity, analyze_method, analyze_unit};
pub use resplint_common::{CancellationToken, Diagnostic, DiagnosticCategory};
pub use resplint_model::{CompilationUnit, MvcTypes};

pub mod tracing_config;
