use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::ids::CharacterId;

/// Progress of a single character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterData {
    pub name: String,
    pub level: i32,
    pub exp: i32,
    pub hp: i32,
    pub mp: i32,
}

impl CharacterData {
    pub fn to_json(&self) -> JsonValue {
        let mut out = JsonMap::new();
        out.insert("name".to_string(), JsonValue::String(self.name.clone()));
        out.insert("level".to_string(), JsonValue::from(self.level));
        out.insert("exp".to_string(), JsonValue::from(self.exp));
        out.insert("hp".to_string(), JsonValue::from(self.hp));
        out.insert("mp".to_string(), JsonValue::from(self.mp));
        JsonValue::Object(out)
    }

    pub fn from_json(value: &JsonValue) -> Self {
        let defaults = CharacterData::default();
        Self {
            name: value
                .get("name")
                .and_then(JsonValue::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.name),
            level: read_i32(value, "level", defaults.level),
            exp: read_i32(value, "exp", defaults.exp),
            hp: read_i32(value, "hp", defaults.hp),
            mp: read_i32(value, "mp", defaults.mp),
        }
    }
}

impl Default for CharacterData {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: 1,
            exp: 0,
            hp: 0,
            mp: 0,
        }
    }
}

/// Per-character progress, keyed by roster identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub characters: BTreeMap<CharacterId, CharacterData>,
}

impl GameData {
    pub fn character(&self, id: CharacterId) -> Option<&CharacterData> {
        self.characters.get(&id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut CharacterData> {
        self.characters.get_mut(&id)
    }

    pub fn to_json(&self) -> JsonValue {
        let mut out = JsonMap::new();
        for (id, character) in &self.characters {
            out.insert(id.as_str().to_string(), character.to_json());
        }
        JsonValue::Object(out)
    }

    /// Rebuilds the roster from stored entries. Keys that do not name a known
    /// character are skipped.
    pub fn from_json(value: &JsonValue) -> Self {
        let mut characters = BTreeMap::new();
        if let Some(entries) = value.as_object() {
            for (key, entry) in entries {
                let Some(id) = CharacterId::from_name(key) else {
                    continue;
                };
                characters.insert(id, CharacterData::from_json(entry));
            }
        }
        Self { characters }
    }
}

impl Default for GameData {
    fn default() -> Self {
        let characters = CharacterId::PLAYABLE
            .iter()
            .map(|&id| (id, CharacterData::default()))
            .collect();
        Self { characters }
    }
}

fn read_i32(value: &JsonValue, key: &str, default: i32) -> i32 {
    value
        .get(key)
        .and_then(JsonValue::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(default)
}
