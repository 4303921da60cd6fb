//! Name resolution for user-supplied object references
//!
//! Maps a reference string to a canonical [`ObjectId`]. Only full
//! 40-character hexadecimal ids are understood at the moment; the
//! repository handle and the expected-type/follow-tags arguments are
//! already part of the signature so callers do not churn when resolution
//! grows.

use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use derive_new::new;

/// A user-supplied object reference.
#[derive(Debug, Clone, new)]
pub struct Revision {
    name: String,
}

impl Revision {
    // TODO: resolve abbreviated ids (with ambiguity detection), HEAD via the
    // symbolic reference chain, and branch/tag names via the refs directories
    pub fn resolve(
        &self,
        _repository: &Repository,
        _expected_kind: Option<ObjectType>,
        _follow_tags: bool,
    ) -> anyhow::Result<ObjectId> {
        ObjectId::try_parse(self.name.clone())
    }
}
