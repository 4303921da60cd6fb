//! A minimal content-addressable object store with a git-like on-disk layout.
//!
//! Objects are immutable, typed, zlib-compressed records addressed by the
//! SHA-1 hash of their encoded bytes. The crate is organized into:
//!
//! - `areas`: repository coordination (locator, configuration, object
//!   database, references)
//! - `artifacts`: the object data types and the name-resolution seam
//! - `commands`: plumbing and porcelain command implementations

pub mod areas;
pub mod artifacts;
pub mod commands;
