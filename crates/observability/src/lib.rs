//! Tracing/logging setup shared by native processes and tests.
//!
//! Browser builds do not install a subscriber; `tracing` events there are
//! no-ops unless the host page wires one up.

/// Tracing configuration (filters, layers).
pub mod tracing;
