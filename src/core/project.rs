//! Project discovery - locating the `.stockmaster/` directory
//!
//! A project is any directory containing `.stockmaster/`. Commands search the
//! current directory and its ancestors, unless `STOCKMASTER_ROOT` points
//! somewhere explicitly.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::PROJECT_CONFIG_TEMPLATE;
use crate::core::store::{FileStore, StoreError};

/// Name of the project marker directory
pub const PROJECT_DIR: &str = ".stockmaster";

/// Environment variable overriding discovery
pub const ROOT_ENV: &str = "STOCKMASTER_ROOT";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not a StockMaster project (no .stockmaster/ found in {0} or any parent). Run 'stock init' first")]
    NotFound(PathBuf),

    #[error("A StockMaster project already exists at {0}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A discovered project
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Discover the project from `STOCKMASTER_ROOT` or the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        if let Ok(root) = std::env::var(ROOT_ENV) {
            if !root.trim().is_empty() {
                return Self::discover_from(Path::new(&root));
            }
        }
        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd)
    }

    /// Walk up from `start` looking for the project directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        start
            .ancestors()
            .find(|dir| dir.join(PROJECT_DIR).is_dir())
            .map(|dir| Self {
                root: dir.to_path_buf(),
            })
            .ok_or_else(|| ProjectError::NotFound(start.to_path_buf()))
    }

    /// Create a project, optionally rewriting the config of an existing one
    pub fn init_with(root: &Path, force: bool) -> Result<Self, ProjectError> {
        let project = Self {
            root: root.to_path_buf(),
        };
        let dir = project.project_dir();
        if dir.is_dir() && !force {
            return Err(ProjectError::AlreadyExists(root.to_path_buf()));
        }

        fs::create_dir_all(&dir)?;
        let config_path = project.config_path();
        if force || !config_path.exists() {
            fs::write(&config_path, PROJECT_CONFIG_TEMPLATE)?;
        }
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.stockmaster/` directory
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    /// Project-level configuration file
    pub fn config_path(&self) -> PathBuf {
        self.project_dir().join("config.yaml")
    }

    /// Open the file store holding this project's collections
    pub fn store(&self) -> Result<FileStore, ProjectError> {
        Ok(FileStore::open(self.project_dir())?)
    }
}
