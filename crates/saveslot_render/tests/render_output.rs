use saveslot_core::model::{CharacterId, Difficulty, Language, SaveData};
use saveslot_render::{TextRenderOptions, format_play_time, render_json_full, render_status_sheet};

fn populated_save() -> SaveData {
    let mut data = SaveData::new();
    data.option_data.volume_bgm = 7;
    data.option_data.language = Language::En;
    data.option_data.difficulty = Difficulty::Hard;

    let hero = data
        .game_data
        .character_mut(CharacterId::Chara001)
        .expect("default roster should contain CHARA_001");
    hero.name = "Hero".to_string();
    hero.level = 5;

    data.record_data.play_time = 12345;
    data.record_data
        .enemy_mut(CharacterId::Enemy001)
        .expect("default records should contain ENEMY_001")
        .kill_count = 10;
    for i in 0..8 {
        data.record_data.add_log(format!("log entry {i}"));
    }
    data
}

#[test]
fn sheet_contains_all_sections() {
    let sheet = render_status_sheet(&populated_save(), TextRenderOptions::default());
    assert!(sheet.contains("SAVE DATA (version 1)"));
    assert!(sheet.contains("::: Options :::"));
    assert!(sheet.contains("::: Characters :::"));
    assert!(sheet.contains("::: Records :::"));
    assert!(sheet.contains("::: Log (8 entries) :::"));
}

#[test]
fn sheet_shows_option_and_character_values() {
    let sheet = render_status_sheet(&populated_save(), TextRenderOptions::default());
    assert!(sheet.contains("BGM Volume:    7 / 10"));
    assert!(sheet.contains("Language:     EN"));
    assert!(sheet.contains("Difficulty:   HARD"));
    assert!(sheet.contains("CHARA_001"));
    assert!(sheet.contains("Hero"));
    assert!(sheet.contains("ENEMY_001: 10 kills"));
    assert!(sheet.contains("Play Time: 3:25:45"));
}

#[test]
fn sheet_truncates_log_unless_verbose() {
    let data = populated_save();

    let sheet = render_status_sheet(&data, TextRenderOptions::default());
    assert!(sheet.contains("... 3 older entries ..."));
    assert!(!sheet.contains("log entry 0"));
    assert!(sheet.contains("log entry 7"));

    let verbose = render_status_sheet(&data, TextRenderOptions { verbose: true });
    assert!(!verbose.contains("older entries"));
    assert!(verbose.contains("log entry 0"));
    assert!(verbose.contains("log entry 7"));
}

#[test]
fn unnamed_characters_render_placeholder() {
    let sheet = render_status_sheet(&SaveData::default(), TextRenderOptions::default());
    assert!(sheet.contains("(unnamed)"));
}

#[test]
fn json_render_matches_model_encoding() {
    let data = populated_save();
    let value = render_json_full(&data);
    assert_eq!(value["version"], 1);
    assert_eq!(value["option_data"]["language"], "EN");
    assert_eq!(value["game_data"]["CHARA_001"]["name"], "Hero");
    assert_eq!(
        value["record_data"]["enemy_record"]["ENEMY_001"]["kill_count"],
        10
    );
}

#[test]
fn play_time_formats_hours_minutes_seconds() {
    assert_eq!(format_play_time(0), "0:00:00");
    assert_eq!(format_play_time(59), "0:00:59");
    assert_eq!(format_play_time(3600), "1:00:00");
    assert_eq!(format_play_time(12345), "3:25:45");
}
