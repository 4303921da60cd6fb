use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, ObjectBox, ObjectError, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Load and decode the object stored under `object_id`.
    ///
    /// Returns `Ok(None)` when no object with that id exists, so callers can
    /// tell a missing object apart from a corrupt one; a present but
    /// undecodable object is an error.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Option<ObjectBox>> {
        let object_path = self.path.join(object_id.to_path());
        if !object_path.is_file() {
            return Ok(None);
        }

        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let (object_type, declared_size) = ObjectType::parse_header(&mut object_reader)
            .with_context(|| format!("Unable to decode object {object_id}"))?;

        let mut payload = Vec::new();
        object_reader.read_to_end(&mut payload)?;

        if payload.len() != declared_size {
            return Err(ObjectError::Malformed {
                id: object_id.clone(),
            }
            .into());
        }

        match object_type {
            ObjectType::Blob => Ok(Some(ObjectBox::Blob(Box::new(Blob::deserialize(
                Cursor::new(payload),
            )?)))),
            // recognized tags whose payload codecs have not landed yet
            kind => Err(ObjectError::Unimplemented { kind }.into()),
        }
    }

    /// Serialize, hash and persist `object`, returning its id.
    ///
    /// An object already present at its derived path is left untouched:
    /// identical content always encodes to identical bytes, so there is
    /// nothing to rewrite.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object.encode()?)?;
        }

        Ok(object_id)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file onto the final path to make the write atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
