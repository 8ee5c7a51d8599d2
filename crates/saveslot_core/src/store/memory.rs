use std::cell::RefCell;

use crate::codec;
use crate::error::SaveError;
use crate::model::SaveData;

use super::SaveStore;

/// In-process store holding the textual encoding, mirroring the contract of
/// a single browser key-value slot. Save/load is single-threaded and
/// blocking, so interior mutability through `RefCell` is sufficient.
#[derive(Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw text, bypassing the codec. Lets tests stage
    /// corrupt or hand-written content.
    pub fn set_raw(&self, text: impl Into<String>) {
        *self.slot.borrow_mut() = Some(text.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

impl SaveStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> Result<Option<SaveData>, SaveError> {
        match self.slot.borrow().as_deref() {
            Some(text) => codec::decode_json(text).map(Some),
            None => Ok(None),
        }
    }

    fn store(&self, data: &SaveData) -> Result<(), SaveError> {
        *self.slot.borrow_mut() = Some(codec::encode_json(data));
        Ok(())
    }
}
