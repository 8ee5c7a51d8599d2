use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    None,
    #[default]
    Jp,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::None => "NONE",
            Language::Jp => "JP",
            Language::En => "EN",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NONE" => Some(Language::None),
            "JP" => Some(Language::Jp),
            "EN" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    None,
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::None => "NONE",
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NONE" => Some(Difficulty::None),
            "EASY" => Some(Difficulty::Easy),
            "NORMAL" => Some(Difficulty::Normal),
            "HARD" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player-facing options: mixer volumes, language, difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionData {
    pub volume_se: i32,
    pub volume_voice: i32,
    pub volume_bgm: i32,
    pub language: Language,
    pub difficulty: Difficulty,
}

impl OptionData {
    pub const MIN_VOLUME: i32 = 0;
    pub const MAX_VOLUME: i32 = 10;
    pub const DEFAULT_VOLUME: i32 = 5;

    pub fn to_json(&self) -> JsonValue {
        let mut out = JsonMap::new();
        out.insert("volume_se".to_string(), JsonValue::from(self.volume_se));
        out.insert(
            "volume_voice".to_string(),
            JsonValue::from(self.volume_voice),
        );
        out.insert("volume_bgm".to_string(), JsonValue::from(self.volume_bgm));
        out.insert(
            "language".to_string(),
            JsonValue::String(self.language.as_str().to_string()),
        );
        out.insert(
            "difficulty".to_string(),
            JsonValue::String(self.difficulty.as_str().to_string()),
        );
        JsonValue::Object(out)
    }

    /// Total conversion: absent or malformed fields keep their defaults,
    /// unrecognized enum names fall back to the default variant, and volumes
    /// are clamped into the valid range.
    pub fn from_json(value: &JsonValue) -> Self {
        Self {
            volume_se: read_volume(value, "volume_se"),
            volume_voice: read_volume(value, "volume_voice"),
            volume_bgm: read_volume(value, "volume_bgm"),
            language: value
                .get("language")
                .and_then(JsonValue::as_str)
                .and_then(Language::from_name)
                .unwrap_or_default(),
            difficulty: value
                .get("difficulty")
                .and_then(JsonValue::as_str)
                .and_then(Difficulty::from_name)
                .unwrap_or_default(),
        }
    }
}

impl Default for OptionData {
    fn default() -> Self {
        Self {
            volume_se: Self::DEFAULT_VOLUME,
            volume_voice: Self::DEFAULT_VOLUME,
            volume_bgm: Self::DEFAULT_VOLUME,
            language: Language::default(),
            difficulty: Difficulty::default(),
        }
    }
}

fn read_volume(value: &JsonValue, key: &str) -> i32 {
    match value.get(key).and_then(JsonValue::as_i64) {
        Some(v) => (v.clamp(
            OptionData::MIN_VOLUME as i64,
            OptionData::MAX_VOLUME as i64,
        )) as i32,
        None => OptionData::DEFAULT_VOLUME,
    }
}
