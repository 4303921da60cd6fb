use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding or dispatching stored objects.
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("Malformed object {id}: bad length")]
    Malformed { id: ObjectId },
    #[error("Unknown object type {tag}")]
    UnknownType { tag: String },
    #[error("Object type {kind} is not implemented")]
    Unimplemented { kind: ObjectType },
}

pub trait Packable {
    /// Produce the canonical payload encoding of the in-memory state.
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    /// Rebuild the in-memory state from a serialized payload; the inverse
    /// of [`Packable::serialize`].
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// A typed, content-addressed record.
///
/// Every kind must supply both `serialize` and `deserialize` to exist at
/// all; the framing, hashing and storage-path derivation are shared.
pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Frame the payload as `<type> <size>\0<payload>`, the bytes that get
    /// hashed and, once compressed, written to disk.
    fn encode(&self) -> Result<Bytes> {
        let payload = self.serialize()?;

        let mut encoded = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), payload.len());
        encoded.write_all(header.as_bytes())?;
        encoded.write_all(&payload)?;

        Ok(Bytes::from(encoded))
    }

    /// The object's identity: SHA-1 of the uncompressed encoded bytes.
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.encode()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }

    fn object_path(&self) -> Result<PathBuf> {
        Ok(self.object_id()?.to_path())
    }
}

/// A decoded object, dispatched on its type tag.
///
/// Adding a new object kind means adding a variant here and one decode arm
/// in the database.
#[derive(Debug)]
pub enum ObjectBox {
    Blob(Box<Blob>),
}
