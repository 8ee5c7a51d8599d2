use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::character::GameData;
use super::option::OptionData;
use super::record::RecordData;

/// Format version written into every save. There is no migration: loading a
/// save with a different version proceeds best-effort, with missing fields
/// taking their defaults.
pub const SAVE_VERSION: u32 = 1;

/// Root of the persisted application state. Owns every nested record
/// exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub option_data: OptionData,
    pub game_data: GameData,
    pub record_data: RecordData,
}

impl SaveData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> JsonValue {
        let mut out = JsonMap::new();
        out.insert("version".to_string(), JsonValue::from(self.version));
        out.insert("option_data".to_string(), self.option_data.to_json());
        out.insert("game_data".to_string(), self.game_data.to_json());
        out.insert("record_data".to_string(), self.record_data.to_json());
        JsonValue::Object(out)
    }

    /// Total conversion from a parsed JSON tree. Never fails: every field is
    /// read with get-with-default semantics.
    pub fn from_json(value: &JsonValue) -> Self {
        let version = value
            .get("version")
            .and_then(JsonValue::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(SAVE_VERSION);
        if version != SAVE_VERSION {
            log::debug!("save version {version} differs from current {SAVE_VERSION}, loading best-effort");
        }

        Self {
            version,
            option_data: OptionData::from_json(value.get("option_data").unwrap_or(&JsonValue::Null)),
            game_data: GameData::from_json(value.get("game_data").unwrap_or(&JsonValue::Null)),
            record_data: RecordData::from_json(value.get("record_data").unwrap_or(&JsonValue::Null)),
        }
    }
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            option_data: OptionData::default(),
            game_data: GameData::default(),
            record_data: RecordData::default(),
        }
    }
}
