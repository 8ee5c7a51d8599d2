//! Storage providers for save data.
//!
//! A provider is injected wherever persistence is needed, so the model and
//! codecs never branch on host capability. "No save exists yet" is the
//! distinguished `Ok(None)` outcome; an existing save that cannot be read or
//! decoded is an error.

mod file;
mod memory;
mod paths;

pub use file::{BinaryFileStore, JsonFileStore};
pub use memory::MemoryStore;
pub use paths::SavePaths;

use crate::error::{SaveError, SaveErrorCode};
use crate::model::SaveData;

pub trait SaveStore {
    /// Short label used in log lines and diagnostics.
    fn kind(&self) -> &'static str;

    /// Read the persisted save. `Ok(None)` means no save exists yet.
    fn load(&self) -> Result<Option<SaveData>, SaveError>;

    /// Persist the save, replacing any previous one.
    fn store(&self, data: &SaveData) -> Result<(), SaveError>;
}

/// Provider selected when the host lacks the backing store (for example a
/// browser key-value store outside a browser). Every operation logs and
/// fails with `Unavailable`; loads never fabricate a default save.
pub struct UnavailableStore {
    reason: &'static str,
}

impl UnavailableStore {
    pub fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl SaveStore for UnavailableStore {
    fn kind(&self) -> &'static str {
        "unavailable"
    }

    fn load(&self) -> Result<Option<SaveData>, SaveError> {
        log::warn!("load skipped: {}", self.reason);
        Err(SaveError::new(SaveErrorCode::Unavailable, self.reason))
    }

    fn store(&self, _data: &SaveData) -> Result<(), SaveError> {
        log::warn!("store skipped: {}", self.reason);
        Err(SaveError::new(SaveErrorCode::Unavailable, self.reason))
    }
}
