//! Tracing configuration.
//!
//! Supports three output formats controlled by `RESPLINT_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, one nested
//!   block per file and method
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Why was a declaration flagged?
//! RESPLINT_LOG=trace RESPLINT_LOG_FORMAT=tree resplint models/
//!
//! # JSON (for tooling)
//! RESPLINT_LOG=debug RESPLINT_LOG_FORMAT=json resplint models/
//!
//! # Fine-grained filtering
//! RESPLINT_LOG="resplint_analyzer=debug,resplint_cli=info" resplint models/
//! ```
//!
//! The subscriber is only initialised when `RESPLINT_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "RESPLINT_LOG";
pub const LOG_FORMAT_ENV: &str = "RESPLINT_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// `RESPLINT_LOG` takes precedence over `RUST_LOG`. Values use the same
/// syntax as `RUST_LOG` (e.g. `debug`, `resplint_analyzer=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `RESPLINT_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with diagnostics on stdout.
pub fn init_tracing() {
    let has_resplint_log = std::env::var(LOG_ENV).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_resplint_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    // `try_init` so a second call (tests, embedding hosts) is a no-op.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
