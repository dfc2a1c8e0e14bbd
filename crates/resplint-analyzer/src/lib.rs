//! Redundant response-declaration analyzer.
//!
//! Flags `ProducesResponseType`-style attributes on handler methods when no
//! `return` in the method body can produce the declared status code (and
//! payload type, when one is declared).
//!
//! Pipeline for one method, leaves first:
//! - `status_codes` - result-type name → HTTP status code table
//! - `classifier` - is a type a status-bearing result at all?
//! - `return_sites` - distinct (type, payload type) pairs the body returns
//! - `compatibility` - status-code and payload-type matching
//! - `declarations` - normalized response declarations of a method
//! - `redundancy` - the matched/orphaned decision per declaration
//! - `analyzer` - entry points tying the above to options and diagnostics

pub mod analyzer;
pub mod classifier;
pub mod compatibility;
pub mod declarations;
pub mod options;
pub mod redundancy;
pub mod return_sites;
pub mod rules;
pub mod status_codes;

pub use analyzer::{AnalysisContext, analyze_method, analyze_unit};
pub use declarations::{Declaration, StatusCodeForm, extract_declarations};
pub use options::{AnalyzerOptions, RuleSeverity};
pub use redundancy::find_redundant;
pub use return_sites::{ReturnSite, collect_return_sites};
pub use status_codes::StatusCodeTable;
