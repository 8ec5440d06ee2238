//! risinggen_core - event catalog and query engine.
//!
//! Pure data types and functions with no I/O. Shells (the CLI, a web front
//! end) load a catalog once and call into [`events`] on every render.

pub mod events;
pub mod serde;
