//! Writes small `actordata`/`moviedata` pairs for tests and benchmarks.
//!
//! Record bodies are emitted in insertion order while each index is sorted by
//! key, so fixtures also exercise the "bodies need not be sorted" property of
//! the format.

mod fixture_builder;
pub use fixture_builder::*;

pub mod samples;
