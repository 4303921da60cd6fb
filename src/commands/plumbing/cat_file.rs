use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::Revision;
use std::io::Write;

impl Repository {
    /// Print an object's payload, uncompressed and without the header.
    pub fn cat_file(&self, kind: ObjectType, name: &str) -> anyhow::Result<()> {
        let object_id = Revision::new(name.to_string()).resolve(self, Some(kind), true)?;

        let object = self
            .database()
            .load(&object_id)?
            .ok_or_else(|| anyhow::anyhow!("Object {object_id} not found"))?;

        match object {
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
        }

        Ok(())
    }
}
