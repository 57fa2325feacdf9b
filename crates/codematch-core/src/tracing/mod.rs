//! Observability for codematch.
//! `tracing` crate with `EnvFilter`, structured events for key operations.

pub mod events;
pub mod setup;

pub use setup::{init_tracing, init_tracing_with_filter};
