use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::ids::CharacterId;

/// Defeat counter for one enemy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordEnemyData {
    pub kill_count: u32,
}

impl RecordEnemyData {
    pub fn to_json(&self) -> JsonValue {
        let mut out = JsonMap::new();
        out.insert("kill_count".to_string(), JsonValue::from(self.kill_count));
        JsonValue::Object(out)
    }

    pub fn from_json(value: &JsonValue) -> Self {
        Self {
            kill_count: value
                .get("kill_count")
                .and_then(JsonValue::as_u64)
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0),
        }
    }
}

/// Play records: accumulated play time, defeat counters and a bounded log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    pub play_time: u64,
    pub enemy_record: BTreeMap<CharacterId, RecordEnemyData>,
    log_data: VecDeque<String>,
}

impl RecordData {
    /// Log entries beyond this count evict the oldest.
    pub const LOG_MAX: usize = 100;

    pub fn enemy(&self, id: CharacterId) -> Option<&RecordEnemyData> {
        self.enemy_record.get(&id)
    }

    pub fn enemy_mut(&mut self, id: CharacterId) -> Option<&mut RecordEnemyData> {
        self.enemy_record.get_mut(&id)
    }

    /// Append a log entry. The newest entry sits at the back; once the log
    /// holds `LOG_MAX` entries the oldest is dropped from the front.
    pub fn add_log(&mut self, text: impl Into<String>) {
        self.log_data.push_back(text.into());
        while self.log_data.len() > Self::LOG_MAX {
            self.log_data.pop_front();
        }
    }

    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.log_data.iter().map(String::as_str)
    }

    pub fn log_len(&self) -> usize {
        self.log_data.len()
    }

    pub fn clear_logs(&mut self) {
        self.log_data.clear();
    }

    pub fn to_json(&self) -> JsonValue {
        let mut enemies = JsonMap::new();
        for (id, record) in &self.enemy_record {
            enemies.insert(id.as_str().to_string(), record.to_json());
        }

        let logs: Vec<JsonValue> = self
            .log_data
            .iter()
            .map(|entry| JsonValue::String(entry.clone()))
            .collect();

        let mut out = JsonMap::new();
        out.insert("play_time".to_string(), JsonValue::from(self.play_time));
        out.insert("enemy_record".to_string(), JsonValue::Object(enemies));
        out.insert("log_data".to_string(), JsonValue::Array(logs));
        JsonValue::Object(out)
    }

    /// Rebuilds the records from stored entries. Unknown enemy keys and
    /// non-string log entries are skipped; a log longer than `LOG_MAX`
    /// keeps only the newest entries.
    pub fn from_json(value: &JsonValue) -> Self {
        let play_time = value
            .get("play_time")
            .and_then(JsonValue::as_u64)
            .unwrap_or(0);

        let mut enemy_record = BTreeMap::new();
        if let Some(entries) = value.get("enemy_record").and_then(JsonValue::as_object) {
            for (key, entry) in entries {
                let Some(id) = CharacterId::from_name(key) else {
                    continue;
                };
                enemy_record.insert(id, RecordEnemyData::from_json(entry));
            }
        }

        let mut log_data: VecDeque<String> = value
            .get("log_data")
            .and_then(JsonValue::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(JsonValue::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        while log_data.len() > Self::LOG_MAX {
            log_data.pop_front();
        }

        Self {
            play_time,
            enemy_record,
            log_data,
        }
    }
}

impl Default for RecordData {
    fn default() -> Self {
        let enemy_record = CharacterId::ENEMIES
            .iter()
            .map(|&id| (id, RecordEnemyData::default()))
            .collect();
        Self {
            play_time: 0,
            enemy_record,
            log_data: VecDeque::new(),
        }
    }
}
