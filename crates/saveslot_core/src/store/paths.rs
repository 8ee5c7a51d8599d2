use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const JSON_FILE_NAME: &str = "save_data.json";
const BINARY_FILE_NAME: &str = "save_data.bin";

/// Locations of the save files for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePaths {
    dir: PathBuf,
}

impl SavePaths {
    /// Resolve the platform per-application data directory. Returns `None`
    /// when the host exposes no home directory.
    pub fn resolve(qualifier: &str, organization: &str, application: &str) -> Option<Self> {
        let proj = ProjectDirs::from(qualifier, organization, application)?;
        Some(Self {
            dir: proj.data_local_dir().to_path_buf(),
        })
    }

    /// Use an explicit directory, e.g. `./save/` during development.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn json_path(&self) -> PathBuf {
        self.dir.join(JSON_FILE_NAME)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.dir.join(BINARY_FILE_NAME)
    }
}
