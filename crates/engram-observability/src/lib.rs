//! # engram-observability
//!
//! Subscriber setup and the named spans every batch operation runs under.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_filter, spans};
