//! # Builders
//!
//! - [`context_builder`] - configures and opens a [`Context`](crate::Context)

pub mod context_builder;

pub use context_builder::ContextBuilder;
