use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the roster an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Playable,
    Enemy,
}

/// Fixed roster of character identifiers.
///
/// The set is closed: three playable characters, three regular enemies and
/// one boss. Save files refer to entries by symbolic name, never by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CharacterId {
    Chara001,
    Chara002,
    Chara003,
    Enemy001,
    Enemy002,
    Enemy003,
    Boss001,
}

impl CharacterId {
    pub const ALL: [CharacterId; 7] = [
        CharacterId::Chara001,
        CharacterId::Chara002,
        CharacterId::Chara003,
        CharacterId::Enemy001,
        CharacterId::Enemy002,
        CharacterId::Enemy003,
        CharacterId::Boss001,
    ];

    pub const PLAYABLE: [CharacterId; 3] = [
        CharacterId::Chara001,
        CharacterId::Chara002,
        CharacterId::Chara003,
    ];

    pub const ENEMIES: [CharacterId; 4] = [
        CharacterId::Enemy001,
        CharacterId::Enemy002,
        CharacterId::Enemy003,
        CharacterId::Boss001,
    ];

    pub fn role(self) -> Role {
        match self {
            CharacterId::Chara001 | CharacterId::Chara002 | CharacterId::Chara003 => Role::Playable,
            CharacterId::Enemy001
            | CharacterId::Enemy002
            | CharacterId::Enemy003
            | CharacterId::Boss001 => Role::Enemy,
        }
    }

    pub fn is_playable(self) -> bool {
        self.role() == Role::Playable
    }

    pub fn is_enemy(self) -> bool {
        self.role() == Role::Enemy
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterId::Chara001 => "CHARA_001",
            CharacterId::Chara002 => "CHARA_002",
            CharacterId::Chara003 => "CHARA_003",
            CharacterId::Enemy001 => "ENEMY_001",
            CharacterId::Enemy002 => "ENEMY_002",
            CharacterId::Enemy003 => "ENEMY_003",
            CharacterId::Boss001 => "BOSS_001",
        }
    }

    /// Resolve a symbolic name back to an identifier. Unknown names yield
    /// `None`; loaders skip those entries instead of failing.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CHARA_001" => Some(CharacterId::Chara001),
            "CHARA_002" => Some(CharacterId::Chara002),
            "CHARA_003" => Some(CharacterId::Chara003),
            "ENEMY_001" => Some(CharacterId::Enemy001),
            "ENEMY_002" => Some(CharacterId::Enemy002),
            "ENEMY_003" => Some(CharacterId::Enemy003),
            "BOSS_001" => Some(CharacterId::Boss001),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
