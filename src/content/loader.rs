//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text into `T`, attributing errors to `file`.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = load_single_file(path)?;
    Ok(data.items)
}

/// Everything read from assets/data.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub settings: GameSettings,
    pub player: PlayerConfig,
    pub levels: Vec<LevelDef>,
}

/// Load game.ron, player.ron and levels.ron from `base_path`.
///
/// Every file falls back to its built-in default; the errors that caused a
/// fallback are returned alongside the content so the caller can report them.
pub fn load_all_content(base_path: &Path) -> (LoadedContent, Vec<ContentLoadError>) {
    let mut errors = Vec::new();

    let settings = load_single_file::<GameSettings>(&base_path.join("game.ron"))
        .unwrap_or_else(|e| {
            errors.push(e);
            GameSettings::default()
        });

    let player = load_single_file::<PlayerConfig>(&base_path.join("player.ron"))
        .unwrap_or_else(|e| {
            errors.push(e);
            PlayerConfig::default()
        });

    let levels = match load_data_file::<LevelDef>(&base_path.join("levels.ron")) {
        Ok(levels) if !levels.is_empty() => levels,
        Ok(_) => {
            errors.push(ContentLoadError {
                file: base_path.join("levels.ron").display().to_string(),
                message: "no levels defined".to_string(),
            });
            default_levels()
        }
        Err(e) => {
            errors.push(e);
            default_levels()
        }
    };

    (
        LoadedContent {
            settings,
            player,
            levels,
        },
        errors,
    )
}
