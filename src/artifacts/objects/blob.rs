//! Blob object
//!
//! Blobs store raw file content. They contain only the bytes themselves,
//! without any metadata like filename or permissions.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`
//! In memory: just the content bytes; serialize and deserialize are
//! identity operations.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Blob object holding opaque file content
///
/// Each unique payload is stored once, identified by its SHA-1 hash. The
/// default blob is empty and valid.
#[derive(Debug, Clone, Default, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
