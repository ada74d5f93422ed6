//! Observability setup for glyphid binaries.

pub mod tracing_setup;
