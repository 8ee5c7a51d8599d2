mod character;
mod ids;
mod option;
mod record;
mod save;

pub use character::{CharacterData, GameData};
pub use ids::{CharacterId, Role};
pub use option::{Difficulty, Language, OptionData};
pub use record::{RecordData, RecordEnemyData};
pub use save::{SAVE_VERSION, SaveData};
