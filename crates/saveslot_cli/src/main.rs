use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use saveslot_core::codec;
use saveslot_core::model::{CharacterId, Difficulty, Language, OptionData, SaveData};
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Bin,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LanguageArg {
    None,
    Jp,
    En,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    None,
    Easy,
    Normal,
    Hard,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE_FILE")]
    path: PathBuf,
    /// Force the file format instead of auto-detecting.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Create a fresh default save at SAVE_FILE and exit.
    #[arg(long)]
    init: bool,
    #[arg(long = "save-version")]
    save_version: bool,
    #[arg(long = "play-time")]
    play_time: bool,
    #[arg(long)]
    language: bool,
    #[arg(long)]
    difficulty: bool,
    #[arg(long)]
    volumes: bool,
    #[arg(long)]
    characters: bool,
    #[arg(long)]
    kills: bool,
    #[arg(long)]
    logs: bool,
    #[arg(long)]
    json: bool,
    /// Show the full log in the status sheet.
    #[arg(long)]
    verbose: bool,
    #[arg(long = "set-volume-se", value_name = "0-10")]
    set_volume_se: Option<i32>,
    #[arg(long = "set-volume-voice", value_name = "0-10")]
    set_volume_voice: Option<i32>,
    #[arg(long = "set-volume-bgm", value_name = "0-10")]
    set_volume_bgm: Option<i32>,
    #[arg(long = "set-language", value_enum)]
    set_language: Option<LanguageArg>,
    #[arg(long = "set-difficulty", value_enum)]
    set_difficulty: Option<DifficultyArg>,
    #[arg(long = "set-play-time", value_name = "SECONDS")]
    set_play_time: Option<u64>,
    #[arg(long = "add-log", value_name = "TEXT")]
    add_log: Option<String>,
    /// Increment the kill counter for an enemy, e.g. ENEMY_001.
    #[arg(long = "record-kill", value_name = "ENEMY_ID", value_parser = parse_enemy_id)]
    record_kill: Option<CharacterId>,
    /// Character to edit with --set-name/--set-level/--set-exp/--set-hp/--set-mp.
    #[arg(long, value_name = "CHARA_ID", value_parser = parse_character_id)]
    chara: Option<CharacterId>,
    #[arg(long = "set-name", requires = "chara")]
    set_name: Option<String>,
    #[arg(long = "set-level", requires = "chara")]
    set_level: Option<i32>,
    #[arg(long = "set-exp", requires = "chara")]
    set_exp: Option<i32>,
    #[arg(long = "set-hp", requires = "chara")]
    set_hp: Option<i32>,
    #[arg(long = "set-mp", requires = "chara")]
    set_mp: Option<i32>,
    #[arg(long)]
    output: Option<PathBuf>,
    /// Format for --output; defaults to the input format.
    #[arg(long = "output-format", value_enum)]
    output_format: Option<FormatArg>,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    save_version: bool,
    play_time: bool,
    language: bool,
    difficulty: bool,
    volumes: bool,
    characters: bool,
    kills: bool,
    logs: bool,
}

impl FieldSelection {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            save_version: cli.save_version,
            play_time: cli.play_time,
            language: cli.language,
            difficulty: cli.difficulty,
            volumes: cli.volumes,
            characters: cli.characters,
            kills: cli.kills,
            logs: cli.logs,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.save_version
            || self.play_time
            || self.language
            || self.difficulty
            || self.volumes
            || self.characters
            || self.kills
            || self.logs
    }

    fn selected_pairs(&self, data: &SaveData) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();

        if self.save_version {
            out.push(("save_version", data.version.to_string()));
        }
        if self.play_time {
            out.push(("play_time", data.record_data.play_time.to_string()));
        }
        if self.language {
            out.push(("language", data.option_data.language.to_string()));
        }
        if self.difficulty {
            out.push(("difficulty", data.option_data.difficulty.to_string()));
        }
        if self.volumes {
            out.push(("volume_se", data.option_data.volume_se.to_string()));
            out.push(("volume_voice", data.option_data.volume_voice.to_string()));
            out.push(("volume_bgm", data.option_data.volume_bgm.to_string()));
        }
        if self.characters {
            for (id, character) in &data.game_data.characters {
                out.push((
                    "character",
                    format!(
                        "{} name={} level={} exp={} hp={} mp={}",
                        id, character.name, character.level, character.exp, character.hp,
                        character.mp
                    ),
                ));
            }
        }
        if self.kills {
            for (id, enemy) in &data.record_data.enemy_record {
                if enemy.kill_count == 0 {
                    continue;
                }
                out.push(("kill", format!("{}={}", id, enemy.kill_count)));
            }
        }
        if self.logs {
            for entry in data.record_data.logs() {
                out.push(("log", entry.to_string()));
            }
        }

        out
    }

    fn selected_json(&self, data: &SaveData) -> JsonMap<String, JsonValue> {
        let mut out = JsonMap::new();

        if self.save_version {
            out.insert("save_version".to_string(), JsonValue::from(data.version));
        }
        if self.play_time {
            out.insert(
                "play_time".to_string(),
                JsonValue::from(data.record_data.play_time),
            );
        }
        if self.language {
            out.insert(
                "language".to_string(),
                JsonValue::String(data.option_data.language.to_string()),
            );
        }
        if self.difficulty {
            out.insert(
                "difficulty".to_string(),
                JsonValue::String(data.option_data.difficulty.to_string()),
            );
        }
        if self.volumes {
            let mut volumes = JsonMap::new();
            volumes.insert("se".to_string(), JsonValue::from(data.option_data.volume_se));
            volumes.insert(
                "voice".to_string(),
                JsonValue::from(data.option_data.volume_voice),
            );
            volumes.insert(
                "bgm".to_string(),
                JsonValue::from(data.option_data.volume_bgm),
            );
            out.insert("volumes".to_string(), JsonValue::Object(volumes));
        }
        if self.characters {
            out.insert("characters".to_string(), data.game_data.to_json());
        }
        if self.kills {
            let mut kills = JsonMap::new();
            for (id, enemy) in &data.record_data.enemy_record {
                kills.insert(id.as_str().to_string(), JsonValue::from(enemy.kill_count));
            }
            out.insert("kill_counts".to_string(), JsonValue::Object(kills));
        }
        if self.logs {
            let logs: Vec<JsonValue> = data
                .record_data
                .logs()
                .map(|entry| JsonValue::String(entry.to_string()))
                .collect();
            out.insert("logs".to_string(), JsonValue::Array(logs));
        }

        out
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let fields = FieldSelection::from_cli(&cli);

    if cli.init {
        run_init(&cli);
        return;
    }

    let has_edits = cli.set_volume_se.is_some()
        || cli.set_volume_voice.is_some()
        || cli.set_volume_bgm.is_some()
        || cli.set_language.is_some()
        || cli.set_difficulty.is_some()
        || cli.set_play_time.is_some()
        || cli.add_log.is_some()
        || cli.record_kill.is_some()
        || cli.set_name.is_some()
        || cli.set_level.is_some()
        || cli.set_exp.is_some()
        || cli.set_hp.is_some()
        || cli.set_mp.is_some();

    if has_edits && cli.output.is_none() {
        eprintln!("--set-*, --add-log and --record-kill flags require --output <PATH>");
        process::exit(2);
    }
    if !has_edits && cli.output.is_some() {
        eprintln!("--output requires at least one edit flag");
        process::exit(2);
    }

    let (mut data, detected) = load_save(&cli);

    apply_edits(&cli, &mut data);

    if has_edits {
        let out_path = cli.output.as_ref().expect("checked above");
        let out_format = cli.output_format.unwrap_or(detected);
        let bytes = encode_save(&data, out_format).unwrap_or_else(|e| {
            eprintln!("Error encoding edited save: {e}");
            process::exit(1);
        });
        fs::write(out_path, bytes).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
    }

    if cli.json {
        let json = if fields.is_field_mode() {
            JsonValue::Object(fields.selected_json(&data))
        } else {
            saveslot_render::render_json_full(&data)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_field_mode() {
        for (key, value) in fields.selected_pairs(&data) {
            println!("{key}={value}");
        }
        return;
    }

    if cli.output.is_some() {
        let out_path = cli.output.as_ref().expect("checked above");
        println!("Wrote edited save to {}", out_path.display());
        return;
    }

    print!(
        "{}",
        saveslot_render::render_status_sheet(
            &data,
            saveslot_render::TextRenderOptions {
                verbose: cli.verbose,
            },
        )
    );
}

fn run_init(cli: &Cli) {
    if cli.path.exists() {
        eprintln!("Refusing to overwrite existing {}", cli.path.display());
        process::exit(1);
    }

    let format = cli.format.unwrap_or_else(|| format_from_extension(&cli.path));
    let bytes = encode_save(&SaveData::default(), format).unwrap_or_else(|e| {
        eprintln!("Error encoding fresh save: {e}");
        process::exit(1);
    });
    if let Some(parent) = cli.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                eprintln!("Error creating {}: {e}", parent.display());
                process::exit(1);
            });
        }
    }
    fs::write(&cli.path, bytes).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {e}", cli.path.display());
        process::exit(1);
    });
    println!("Initialized fresh save at {}", cli.path.display());
}

fn load_save(cli: &Cli) -> (SaveData, FormatArg) {
    let bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    match cli.format {
        Some(FormatArg::Json) => match decode_text(&bytes) {
            Ok(data) => (data, FormatArg::Json),
            Err(e) => {
                eprintln!("Error parsing save file: {}", cli.path.display());
                eprintln!("  {e}");
                process::exit(1);
            }
        },
        Some(FormatArg::Bin) => match codec::decode_binary(&bytes) {
            Ok(data) => (data, FormatArg::Bin),
            Err(e) => {
                eprintln!("Error parsing save file: {}", cli.path.display());
                eprintln!("  {e}");
                process::exit(1);
            }
        },
        None => {
            let text_result = decode_text(&bytes);
            match text_result {
                Ok(data) => {
                    log::debug!("auto-detected text save at {}", cli.path.display());
                    (data, FormatArg::Json)
                }
                Err(text_err) => match codec::decode_binary(&bytes) {
                    Ok(data) => {
                        log::debug!("auto-detected binary save at {}", cli.path.display());
                        (data, FormatArg::Bin)
                    }
                    Err(bin_err) => {
                        eprintln!("Error parsing save file: {}", cli.path.display());
                        eprintln!("  as text: {text_err}");
                        eprintln!("  as binary: {bin_err}");
                        process::exit(1);
                    }
                },
            }
        }
    }
}

fn decode_text(bytes: &[u8]) -> Result<SaveData, saveslot_core::SaveError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        saveslot_core::SaveError::new(
            saveslot_core::SaveErrorCode::Corrupt,
            format!("save text is not UTF-8: {e}"),
        )
    })?;
    codec::decode_json(text)
}

fn encode_save(data: &SaveData, format: FormatArg) -> Result<Vec<u8>, saveslot_core::SaveError> {
    match format {
        FormatArg::Json => Ok(codec::encode_json(data).into_bytes()),
        FormatArg::Bin => codec::encode_binary(data),
    }
}

fn format_from_extension(path: &std::path::Path) -> FormatArg {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("bin") | Some("sav") => FormatArg::Bin,
        _ => FormatArg::Json,
    }
}

fn apply_edits(cli: &Cli, data: &mut SaveData) {
    if let Some(volume) = cli.set_volume_se {
        data.option_data.volume_se = checked_volume("--set-volume-se", volume);
    }
    if let Some(volume) = cli.set_volume_voice {
        data.option_data.volume_voice = checked_volume("--set-volume-voice", volume);
    }
    if let Some(volume) = cli.set_volume_bgm {
        data.option_data.volume_bgm = checked_volume("--set-volume-bgm", volume);
    }
    if let Some(language) = cli.set_language {
        data.option_data.language = to_core_language(language);
    }
    if let Some(difficulty) = cli.set_difficulty {
        data.option_data.difficulty = to_core_difficulty(difficulty);
    }
    if let Some(seconds) = cli.set_play_time {
        data.record_data.play_time = seconds;
    }
    if let Some(text) = &cli.add_log {
        data.record_data.add_log(text.clone());
    }
    if let Some(enemy) = cli.record_kill {
        data.record_data
            .enemy_record
            .entry(enemy)
            .or_default()
            .kill_count += 1;
    }
    if let Some(id) = cli.chara {
        let character = data.game_data.characters.entry(id).or_default();
        if let Some(name) = &cli.set_name {
            character.name = name.clone();
        }
        if let Some(level) = cli.set_level {
            character.level = level;
        }
        if let Some(exp) = cli.set_exp {
            character.exp = exp;
        }
        if let Some(hp) = cli.set_hp {
            character.hp = hp;
        }
        if let Some(mp) = cli.set_mp {
            character.mp = mp;
        }
    }
}

fn checked_volume(flag: &str, volume: i32) -> i32 {
    if !(OptionData::MIN_VOLUME..=OptionData::MAX_VOLUME).contains(&volume) {
        eprintln!(
            "{flag} expects a value between {} and {}, got {volume}",
            OptionData::MIN_VOLUME,
            OptionData::MAX_VOLUME
        );
        process::exit(2);
    }
    volume
}

fn parse_character_id(raw: &str) -> Result<CharacterId, String> {
    CharacterId::from_name(&raw.trim().to_ascii_uppercase()).ok_or_else(|| {
        format!(
            "unknown character id '{raw}'; expected one of: {}",
            id_list(&CharacterId::ALL)
        )
    })
}

fn parse_enemy_id(raw: &str) -> Result<CharacterId, String> {
    let id = parse_character_id(raw)?;
    if !id.is_enemy() {
        return Err(format!(
            "'{raw}' is not an enemy; expected one of: {}",
            id_list(&CharacterId::ENEMIES)
        ));
    }
    Ok(id)
}

fn id_list(ids: &[CharacterId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn to_core_language(arg: LanguageArg) -> Language {
    match arg {
        LanguageArg::None => Language::None,
        LanguageArg::Jp => Language::Jp,
        LanguageArg::En => Language::En,
    }
}

fn to_core_difficulty(arg: DifficultyArg) -> Difficulty {
    match arg {
        DifficultyArg::None => Difficulty::None,
        DifficultyArg::Easy => Difficulty::Easy,
        DifficultyArg::Normal => Difficulty::Normal,
        DifficultyArg::Hard => Difficulty::Hard,
    }
}
