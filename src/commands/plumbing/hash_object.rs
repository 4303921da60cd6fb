use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, ObjectError};
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

/// Hash `file` as an object of `kind`, persisting it when a repository is
/// supplied.
///
/// The id is a pure function of the encoded bytes, so it is computed and
/// printed whether or not anything reaches disk.
pub fn hash_object(
    repository: Option<&Repository>,
    kind: ObjectType,
    file: &Path,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    let data =
        std::fs::read(file).context(format!("Unable to read file {}", file.display()))?;

    let object = match kind {
        ObjectType::Blob => Blob::new(Bytes::from(data)),
        kind => return Err(ObjectError::Unimplemented { kind }.into()),
    };

    let object_id = match repository {
        Some(repository) => repository.database().store(&object)?,
        None => object.object_id()?,
    };

    write!(writer, "{object_id}")?;

    Ok(())
}
