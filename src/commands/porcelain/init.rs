use crate::areas::repository::Repository;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Create a repository at `path` and report where it landed.
    pub fn init(path: &Path, writer: Box<dyn Write>) -> anyhow::Result<()> {
        let repository = Repository::create(path, writer)?;

        write!(
            repository.writer(),
            "Initialized empty repository in {}",
            repository.work_tree().display()
        )?;

        Ok(())
    }
}
