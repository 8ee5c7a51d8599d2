use saveslot_core::codec;
use saveslot_core::error::SaveErrorCode;
use saveslot_core::model::{CharacterId, Difficulty, Language, SAVE_VERSION};

#[test]
fn empty_object_loads_as_empty_shell() {
    let data = codec::decode_json("{}").expect("empty object should load");
    assert_eq!(data.version, SAVE_VERSION);
    assert_eq!(data.option_data.volume_se, 5);
    assert_eq!(data.option_data.language, Language::Jp);
    // Mappings are rebuilt purely from stored entries.
    assert!(data.game_data.characters.is_empty());
    assert!(data.record_data.enemy_record.is_empty());
    assert_eq!(data.record_data.log_len(), 0);
}

#[test]
fn unknown_language_falls_back_to_jp() {
    let text = r#"{"option_data": {"language": "KR"}}"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.option_data.language, Language::Jp);
}

#[test]
fn unknown_difficulty_falls_back_to_normal() {
    let text = r#"{"option_data": {"difficulty": "NIGHTMARE"}}"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.option_data.difficulty, Difficulty::Normal);
}

#[test]
fn malformed_scalars_take_defaults() {
    let text = r#"{
        "version": "one",
        "option_data": {"volume_se": "loud", "language": 3},
        "record_data": {"play_time": "forever"}
    }"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.version, SAVE_VERSION);
    assert_eq!(data.option_data.volume_se, 5);
    assert_eq!(data.option_data.language, Language::Jp);
    assert_eq!(data.record_data.play_time, 0);
}

#[test]
fn volumes_clamp_into_valid_range() {
    let text = r#"{"option_data": {"volume_se": -3, "volume_voice": 42, "volume_bgm": 10}}"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.option_data.volume_se, 0);
    assert_eq!(data.option_data.volume_voice, 10);
    assert_eq!(data.option_data.volume_bgm, 10);
}

#[test]
fn unknown_character_keys_are_skipped() {
    let text = r#"{"game_data": {
        "CHARA_001": {"name": "Hero", "level": 5},
        "CHARA_999": {"name": "Ghost", "level": 50}
    }}"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.game_data.characters.len(), 1);
    let hero = data
        .game_data
        .character(CharacterId::Chara001)
        .expect("known key should survive");
    assert_eq!(hero.name, "Hero");
    assert_eq!(hero.level, 5);
    assert_eq!(hero.exp, 0);
}

#[test]
fn unknown_enemy_keys_are_skipped() {
    let text = r#"{"record_data": {"enemy_record": {
        "ENEMY_001": {"kill_count": 7},
        "DRAGON_001": {"kill_count": 3}
    }}}"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.record_data.enemy_record.len(), 1);
    assert_eq!(
        data.record_data
            .enemy(CharacterId::Enemy001)
            .expect("known enemy should survive")
            .kill_count,
        7
    );
}

#[test]
fn missing_log_data_yields_empty_log() {
    let text = r#"{"record_data": {"play_time": 60}}"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.record_data.play_time, 60);
    assert_eq!(data.record_data.log_len(), 0);
}

#[test]
fn non_string_log_entries_are_skipped() {
    let text = r#"{"record_data": {"log_data": ["first", 42, null, "last"]}}"#;
    let data = codec::decode_json(text).expect("save should load");
    let logs: Vec<&str> = data.record_data.logs().collect();
    assert_eq!(logs, vec!["first", "last"]);
}

#[test]
fn oversized_log_keeps_newest_entries() {
    let entries: Vec<String> = (0..120).map(|i| format!("\"entry {i}\"")).collect();
    let text = format!(r#"{{"record_data": {{"log_data": [{}]}}}}"#, entries.join(","));
    let data = codec::decode_json(&text).expect("save should load");
    assert_eq!(data.record_data.log_len(), 100);
    let logs: Vec<&str> = data.record_data.logs().collect();
    assert_eq!(logs.first(), Some(&"entry 20"));
    assert_eq!(logs.last(), Some(&"entry 119"));
}

#[test]
fn future_version_loads_best_effort() {
    let text = r#"{"version": 99, "option_data": {"volume_bgm": 2}}"#;
    let data = codec::decode_json(text).expect("save should load");
    assert_eq!(data.version, 99);
    assert_eq!(data.option_data.volume_bgm, 2);
}

#[test]
fn unparseable_text_is_corrupt() {
    let err = codec::decode_json("not a save").expect_err("garbage should not load");
    assert_eq!(err.code, SaveErrorCode::Corrupt);

    let err = codec::decode_json("{\"version\": ").expect_err("truncated json should not load");
    assert_eq!(err.code, SaveErrorCode::Corrupt);
}

#[test]
fn corrupt_binary_is_corrupt() {
    let err = codec::decode_binary(&[0x00, 0x01, 0x02]).expect_err("garbage should not decode");
    assert_eq!(err.code, SaveErrorCode::Corrupt);
}
