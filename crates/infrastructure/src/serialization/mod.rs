//! Deterministic JSON serialization for the on-disk storage file.
//!
//! Keys come out sorted (via `BTreeMap`), indented with two spaces and
//! followed by a trailing newline.

mod json;

pub use json::*;
