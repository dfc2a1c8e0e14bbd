//! Centralized limits and thresholds for the analyzer.
//!
//! Host models are supplied from outside and are not trusted to be
//! well-formed: a base-type chain may loop and a syntax tree may be very
//! large. Every walk over such structures is bounded by one of these limits.

// =============================================================================
// Traversal Limits
// =============================================================================

/// Maximum number of links followed when walking a base-type chain.
///
/// Real inheritance chains are a handful of links deep (`OkObjectResult` →
/// `ObjectResult` → `ActionResult` → `object`). A chain longer than this is
/// treated as cyclic and the walk stops as if the root had been reached.
pub const MAX_BASE_CHAIN_DEPTH: usize = 64;

/// Number of visited syntax nodes between two cancellation checks.
///
/// Checking an atomic on every node is cheap but not free; checking every
/// 256 nodes keeps the latency of a cancel request well below a millisecond
/// for realistic method bodies.
pub const CANCELLATION_CHECK_INTERVAL: usize = 256;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for the directly implemented interfaces of a type.
pub const INLINE_INTERFACE_CAPACITY: usize = 4;
