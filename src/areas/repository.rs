use crate::areas::config::{Config, SUPPORTED_FORMAT_VERSION};
use crate::areas::database::Database;
use crate::areas::refs::Refs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the metadata directory kept at the root of the work tree
pub const METADATA_DIR: &str = ".git";

const DEFAULT_BRANCH: &str = "master";
const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

/// Errors raised while locating, opening or creating a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not a repository: {path}")]
    NotARepository { path: PathBuf },
    #[error("Configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("Unsupported repository format version: {version}")]
    UnsupportedFormatVersion { version: u32 },
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
    #[error("Directory is not empty: {path}")]
    NotEmpty { path: PathBuf },
    #[error("No repository found here or in any parent directory")]
    NoRepository,
}

pub struct Repository {
    work_tree: Box<Path>,
    metadata: Box<Path>,
    config: Config,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("work_tree", &self.work_tree)
            .field("metadata", &self.metadata)
            .field("config", &self.config)
            .field("database", &self.database)
            .field("refs", &self.refs)
            .finish()
    }
}

impl Repository {
    /// Open the repository rooted at `path`.
    ///
    /// With `force` the existence and format checks are skipped and a
    /// missing configuration falls back to the default; `create` relies on
    /// this to build a `Repository` before its metadata directory exists.
    pub fn open(
        path: &Path,
        force: bool,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let metadata = path.join(METADATA_DIR);

        if !force && !metadata.is_dir() {
            return Err(RepositoryError::NotARepository {
                path: path.to_path_buf(),
            }
            .into());
        }

        let config_path = metadata.join("config");
        let config = if config_path.is_file() {
            Config::load(&config_path)?
        } else if force {
            Config::default()
        } else {
            return Err(RepositoryError::MissingConfig { path: config_path }.into());
        };

        if !force && config.format_version() != SUPPORTED_FORMAT_VERSION {
            return Err(RepositoryError::UnsupportedFormatVersion {
                version: config.format_version(),
            }
            .into());
        }

        let database = Database::new(metadata.join("objects").into_boxed_path());
        let refs = Refs::new(metadata.clone().into_boxed_path());

        Ok(Repository {
            work_tree: path.to_path_buf().into_boxed_path(),
            metadata: metadata.into_boxed_path(),
            config,
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    /// Create a new repository at `path`, laying out the metadata tree.
    ///
    /// The target must not exist, or be an empty directory. The metadata
    /// skeleton must come up whole; any directory-creation failure aborts
    /// the operation.
    pub fn create(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if path.exists() {
            if !path.is_dir() {
                return Err(RepositoryError::NotADirectory {
                    path: path.to_path_buf(),
                }
                .into());
            }

            if path.read_dir()?.next().is_some() {
                return Err(RepositoryError::NotEmpty {
                    path: path.to_path_buf(),
                }
                .into());
            }
        } else {
            std::fs::create_dir_all(path)
                .context(format!("Unable to create work tree {}", path.display()))?;
        }

        let path = path
            .canonicalize()
            .context(format!("Unable to resolve path {}", path.display()))?;
        let repository = Self::open(&path, true, writer)?;

        for segments in [
            &["branches"][..],
            &["objects"][..],
            &["refs", "tags"][..],
            &["refs", "heads"][..],
        ] {
            repository.metadata_dir(segments, true)?.context(format!(
                "Unable to create metadata directory {}",
                segments.join("/")
            ))?;
        }

        let description_path = repository
            .metadata_file(&["description"], false)?
            .context("Unable to resolve description path")?;
        std::fs::write(&description_path, DESCRIPTION)
            .context("Failed to write repository description")?;

        repository
            .refs()
            .set_head(&format!("refs/heads/{DEFAULT_BRANCH}"))?;

        let config_path = repository
            .metadata_file(&["config"], false)?
            .context("Unable to resolve config path")?;
        repository.config.save(&config_path)?;

        Ok(repository)
    }

    /// Walk upward from `start` looking for a metadata directory.
    ///
    /// This is a pure lookup: it returns `Ok(None)` when no repository
    /// exists above `start` and `required` is false. The walk operates on
    /// the canonicalized path and stops once the parent no longer changes,
    /// so symlink cycles cannot keep it alive.
    pub fn find(
        start: &Path,
        required: bool,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Option<Self>> {
        let mut current = start
            .canonicalize()
            .context(format!("Unable to resolve path {}", start.display()))?;

        loop {
            if current.join(METADATA_DIR).is_dir() {
                return Ok(Some(Self::open(&current, false, writer)?));
            }

            match current.parent() {
                Some(parent) if parent != current.as_path() => current = parent.to_path_buf(),
                // reached the filesystem root without finding a repository
                _ => {
                    return if required {
                        Err(RepositoryError::NoRepository.into())
                    } else {
                        Ok(None)
                    };
                }
            }
        }
    }

    /// Join `parts` under the metadata directory. Pure composition, no I/O.
    pub fn metadata_path(&self, parts: &[&str]) -> PathBuf {
        parts
            .iter()
            .fold(self.metadata.to_path_buf(), |path, part| path.join(part))
    }

    /// Resolve a directory under the metadata directory.
    ///
    /// `Ok(None)` means the directory is absent and `create` was not set;
    /// a path that exists but is not a directory is an error.
    pub fn metadata_dir(&self, parts: &[&str], create: bool) -> anyhow::Result<Option<PathBuf>> {
        let path = self.metadata_path(parts);

        if path.exists() {
            return if path.is_dir() {
                Ok(Some(path))
            } else {
                Err(RepositoryError::NotADirectory { path }.into())
            };
        }

        if create {
            std::fs::create_dir_all(&path)
                .context(format!("Unable to create directory {}", path.display()))?;
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Resolve a file path under the metadata directory, establishing the
    /// parent chain when `create_parent` is set. The file itself is left
    /// for the caller to create.
    pub fn metadata_file(
        &self,
        parts: &[&str],
        create_parent: bool,
    ) -> anyhow::Result<Option<PathBuf>> {
        let Some((_, parents)) = parts.split_last() else {
            return Ok(Some(self.metadata.to_path_buf()));
        };

        match self.metadata_dir(parents, create_parent)? {
            Some(_) => Ok(Some(self.metadata_path(parts))),
            None => Ok(None),
        }
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
