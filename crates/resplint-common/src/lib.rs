//! Common types and utilities for the resplint analyzer.
//!
//! This crate provides foundational types used across all resplint crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message formatting)
//! - Source spans (`SourceSpan`)
//! - Analyzer limits and thresholds
//! - Cooperative cancellation (`CancellationToken`, `Cancelled`)

// Diagnostic records handed back to the host
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, format_message};

// Span - Source location of an attribute application
pub mod span;
pub use span::SourceSpan;

// Centralized limits and thresholds
pub mod limits;

// Cancellation signal threaded through tree traversal
pub mod cancellation;
pub use cancellation::{CancellationToken, Cancelled};
