//! Object data types and algorithms
//!
//! This module contains the core content-addressed types:
//!
//! - `objects`: object traits and concrete kinds (blob, with tree, commit
//!   and tag reserved as recognized tags)
//! - `revision`: name resolution from user-supplied references to object ids

pub mod objects;
pub mod revision;
