//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. Four kinds
//! are recognized:
//!
//! - **Blob**: File content (raw bytes), the only kind with a payload
//!   codec in this crate
//! - **Tree**: Directory listing (reserved)
//! - **Commit**: Snapshot with metadata (reserved)
//! - **Tag**: Annotated reference to another object (reserved)
//!
//! Every object is framed on disk as `<type> <size>\0<content>` and
//! compressed; its id is the SHA-1 of the uncompressed framed bytes.

pub mod blob;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
