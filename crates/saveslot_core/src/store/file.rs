use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{SaveError, SaveErrorCode};
use crate::model::SaveData;

use super::SaveStore;

/// Save file in the textual format.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for JsonFileStore {
    fn kind(&self) -> &'static str {
        "json-file"
    }

    fn load(&self) -> Result<Option<SaveData>, SaveError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SaveError::new(
                    SaveErrorCode::Io,
                    format!("failed to read {}: {e}", self.path.display()),
                ));
            }
        };

        let data = codec::decode_json(&text)?;
        log::info!("loaded save from {}", self.path.display());
        Ok(Some(data))
    }

    fn store(&self, data: &SaveData) -> Result<(), SaveError> {
        ensure_parent_dir(&self.path)?;
        fs::write(&self.path, codec::encode_json(data)).map_err(|e| {
            SaveError::new(
                SaveErrorCode::Io,
                format!("failed to write {}: {e}", self.path.display()),
            )
        })?;
        log::info!("saved to {}", self.path.display());
        Ok(())
    }
}

/// Save file in the opaque binary format.
pub struct BinaryFileStore {
    path: PathBuf,
}

impl BinaryFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for BinaryFileStore {
    fn kind(&self) -> &'static str {
        "binary-file"
    }

    fn load(&self) -> Result<Option<SaveData>, SaveError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SaveError::new(
                    SaveErrorCode::Io,
                    format!("failed to read {}: {e}", self.path.display()),
                ));
            }
        };

        let data = codec::decode_binary(&bytes)?;
        log::info!("loaded binary save from {}", self.path.display());
        Ok(Some(data))
    }

    fn store(&self, data: &SaveData) -> Result<(), SaveError> {
        ensure_parent_dir(&self.path)?;
        let bytes = codec::encode_binary(data)?;
        fs::write(&self.path, bytes).map_err(|e| {
            SaveError::new(
                SaveErrorCode::Io,
                format!("failed to write {}: {e}", self.path.display()),
            )
        })?;
        log::info!("saved binary to {}", self.path.display());
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), SaveError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|e| {
        SaveError::new(
            SaveErrorCode::Io,
            format!("failed to create {}: {e}", parent.display()),
        )
    })
}
