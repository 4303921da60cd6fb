//! Command implementations
//!
//! Commands are organized into two categories:
//!
//! - `plumbing`: Low-level commands for direct object manipulation
//!   (cat-file, hash-object)
//! - `porcelain`: User-facing commands (init)
//!
//! Plumbing commands provide building blocks, while porcelain commands
//! compose them into higher-level operations.

pub mod plumbing;
pub mod porcelain;
