//! Human-readable rendering of save data.

use std::fmt::Write as _;

use saveslot_core::model::SaveData;
use serde_json::Value as JsonValue;

const LOG_TAIL_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// Show the full log instead of the newest few entries.
    pub verbose: bool,
}

/// Render the full save as a JSON value (the textual save format itself).
pub fn render_json_full(data: &SaveData) -> JsonValue {
    data.to_json()
}

/// Render the save as a text status sheet.
pub fn render_status_sheet(data: &SaveData, options: TextRenderOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "SAVE DATA (version {})", data.version);
    let _ = writeln!(out);

    let _ = writeln!(out, "::: Options :::");
    let option = &data.option_data;
    let _ = writeln!(out, "  SE Volume:    {:>2} / 10", option.volume_se);
    let _ = writeln!(out, "  Voice Volume: {:>2} / 10", option.volume_voice);
    let _ = writeln!(out, "  BGM Volume:   {:>2} / 10", option.volume_bgm);
    let _ = writeln!(out, "  Language:     {}", option.language);
    let _ = writeln!(out, "  Difficulty:   {}", option.difficulty);

    let _ = writeln!(out);
    let _ = writeln!(out, "::: Characters :::");
    if data.game_data.characters.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (id, character) in &data.game_data.characters {
        let name = if character.name.is_empty() {
            "(unnamed)"
        } else {
            character.name.as_str()
        };
        let _ = writeln!(
            out,
            "  {:<10} {:<12} Lv {:>3}  Exp {:>6}  HP {:>5}  MP {:>5}",
            id, name, character.level, character.exp, character.hp, character.mp
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "::: Records :::");
    let record = &data.record_data;
    let _ = writeln!(out, "  Play Time: {}", format_play_time(record.play_time));
    if record.enemy_record.is_empty() {
        let _ = writeln!(out, "  (no battle records)");
    }
    for (id, enemy) in &record.enemy_record {
        let _ = writeln!(out, "  {}: {} kills", id, enemy.kill_count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "::: Log ({} entries) :::", record.log_len());
    let skipped = if options.verbose {
        0
    } else {
        record.log_len().saturating_sub(LOG_TAIL_LEN)
    };
    if skipped > 0 {
        let _ = writeln!(out, "  ... {skipped} older entries ...");
    }
    for entry in record.logs().skip(skipped) {
        let _ = writeln!(out, "  {entry}");
    }

    out
}

/// Format accumulated play time as `H:MM:SS`.
pub fn format_play_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
