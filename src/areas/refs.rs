//! References (HEAD, branches, tags)
//!
//! References are human-readable names that designate objects. Only their
//! directory layout and the symbolic HEAD pointer are managed here; reading
//! and updating individual refs belongs to higher layers.
//!
//! ## File Format
//!
//! HEAD holds a single symbolic reference line: `ref: refs/heads/<branch>`.

use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn tags_path(&self) -> PathBuf {
        self.refs_path().join("tags")
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Point HEAD at another reference, e.g. `refs/heads/master`.
    pub fn set_head(&self, target: &str) -> anyhow::Result<()> {
        std::fs::write(self.head_path(), format!("ref: {target}\n"))
            .context("Failed to write HEAD reference")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_head_writes_a_symbolic_reference_line() {
        let dir = assert_fs::TempDir::new().unwrap();
        let refs = Refs::new(dir.path().to_path_buf().into_boxed_path());

        refs.set_head("refs/heads/master").unwrap();

        let head = std::fs::read_to_string(refs.head_path()).unwrap();
        assert_eq!(head, "ref: refs/heads/master\n");
    }

    #[test]
    fn reference_paths_nest_under_the_metadata_directory() {
        let refs = Refs::new(PathBuf::from(".git").into_boxed_path());

        assert_eq!(refs.heads_path(), PathBuf::from(".git/refs/heads"));
        assert_eq!(refs.tags_path(), PathBuf::from(".git/refs/tags"));
        assert_eq!(refs.head_path(), PathBuf::from(".git/HEAD"));
    }
}
