use crate::error::SaveError;
use crate::model::SaveData;
use crate::store::SaveStore;

/// Result of a successful load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A save existed and now replaces the in-memory state.
    Loaded,
    /// No save exists yet; the in-memory state is untouched.
    Absent,
}

/// Owner of the live save data.
///
/// The state is replaced wholesale on a successful load and left untouched
/// on any failure, so callers never observe a partially-applied save.
#[derive(Debug, Default)]
pub struct SaveManager {
    data: SaveData,
}

impl SaveManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut SaveData {
        &mut self.data
    }

    pub fn reset(&mut self) {
        self.data = SaveData::default();
    }

    pub fn load_from(&mut self, store: &dyn SaveStore) -> Result<LoadOutcome, SaveError> {
        match store.load()? {
            Some(data) => {
                self.data = data;
                Ok(LoadOutcome::Loaded)
            }
            None => {
                log::info!("no save found in {} store", store.kind());
                Ok(LoadOutcome::Absent)
            }
        }
    }

    pub fn save_to(&self, store: &dyn SaveStore) -> Result<(), SaveError> {
        store.store(&self.data)
    }
}
