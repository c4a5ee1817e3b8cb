//! CLI command implementations.
//!
//! Each command wires one aggregator operation to stdout. The reader
//! behind the services is built once in `main` and injected here.

pub mod ingredients;
pub mod products;
pub mod session;
pub mod users;
