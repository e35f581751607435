//! Game setup and application settings.
//!
//! Settings come from three layers: built-in defaults, an optional JSON
//! settings file, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::STANDARD_FEN;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

impl PlayerKind {
    pub fn is_computer(self) -> bool {
        self == PlayerKind::Computer
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Computer => "Computer",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Computer,
            PlayerKind::Computer => PlayerKind::Human,
        }
    }
}

/// Named starting positions offered by the reset bar.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StartPreset {
    #[default]
    Standard,
    /// Both sides one step from promoting
    PromotionRace,
    /// King and queen against a lone king
    QueenEndgame,
}

impl StartPreset {
    pub const ALL: [StartPreset; 3] = [
        StartPreset::Standard,
        StartPreset::PromotionRace,
        StartPreset::QueenEndgame,
    ];

    pub fn fen(self) -> &'static str {
        match self {
            StartPreset::Standard => STANDARD_FEN,
            StartPreset::PromotionRace => "8/P6k/8/8/8/8/p6K/8 w - - 0 1",
            StartPreset::QueenEndgame => "4k3/8/8/8/8/8/8/3QK3 w - - 0 1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StartPreset::Standard => "Standard",
            StartPreset::PromotionRace => "Promotion race",
            StartPreset::QueenEndgame => "Queen endgame",
        }
    }
}

/// Who plays each side and where the game starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct GameSetup {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub start: StartPreset,
    /// Custom starting FEN; takes precedence over `start`
    pub fen: Option<String>,
}

impl GameSetup {
    /// FEN to load after a reset, or `None` for the engine's own starting position.
    pub fn start_fen(&self) -> Option<&str> {
        match (&self.fen, self.start) {
            (Some(fen), _) => Some(fen.as_str()),
            (None, StartPreset::Standard) => None,
            (None, preset) => Some(preset.fen()),
        }
    }
}

pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 250;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub setup: GameSetup,
    /// Pause before each computer move, in milliseconds
    pub computer_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            setup: GameSetup::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing settings file {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// JSON schema of the settings file.
    pub fn schema() -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&schemars::schema_for!(Settings))?)
    }
}

#[derive(Debug, Parser)]
#[command(name = "chess-view", about = "Drag-and-drop chess board")]
pub struct Cli {
    /// Who plays white
    #[arg(long, value_enum)]
    pub white: Option<PlayerKind>,
    /// Who plays black
    #[arg(long, value_enum)]
    pub black: Option<PlayerKind>,
    /// Named starting position
    #[arg(long, value_enum)]
    pub start: Option<StartPreset>,
    /// Custom starting position as FEN
    #[arg(long)]
    pub fen: Option<String>,
    /// JSON settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub computer_delay_ms: Option<u64>,
    /// Log filter, e.g. `debug` or `chess_view=trace` (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Print the settings file JSON schema and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Cli {
    /// Merge defaults, the settings file and flags, in that order.
    pub fn resolve(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let setup = &mut settings.setup;
        if let Some(white) = self.white {
            setup.white = white;
        }
        if let Some(black) = self.black {
            setup.black = black;
        }
        if let Some(start) = self.start {
            setup.start = start;
            setup.fen = None;
        }
        if let Some(fen) = &self.fen {
            setup.fen = Some(fen.clone());
        }
        if let Some(delay) = self.computer_delay_ms {
            settings.computer_delay_ms = delay;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.setup.white, PlayerKind::Human);
        assert_eq!(settings.setup.black, PlayerKind::Human);
        assert_eq!(settings.setup.start_fen(), None);
        assert_eq!(settings.computer_delay_ms, DEFAULT_COMPUTER_DELAY_MS);
    }

    #[test]
    fn test_settings_from_json() {
        let settings = Settings::from_json(
            r#"{ "setup": { "white": "computer", "start": "queen-endgame" }, "computer-delay-ms": 0 }"#,
        )
        .unwrap();
        assert_eq!(settings.setup.white, PlayerKind::Computer);
        assert_eq!(settings.setup.black, PlayerKind::Human);
        assert_eq!(settings.setup.start_fen(), Some(StartPreset::QueenEndgame.fen()));
        assert_eq!(settings.computer_delay_ms, 0);

        assert!(Settings::from_json(r#"{ "setup": { "white": "robot" } }"#).is_err());
    }

    #[test]
    fn test_custom_fen_wins() {
        let setup = GameSetup {
            start: StartPreset::PromotionRace,
            fen: Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1".to_string()),
            ..GameSetup::default()
        };
        assert_eq!(setup.start_fen(), Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "chess-view",
            "--white",
            "computer",
            "--start",
            "promotion-race",
            "--computer-delay-ms",
            "10",
        ])
        .unwrap();
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.setup.white, PlayerKind::Computer);
        assert_eq!(settings.setup.black, PlayerKind::Human);
        assert_eq!(settings.setup.start, StartPreset::PromotionRace);
        assert_eq!(settings.computer_delay_ms, 10);
    }

    #[test]
    fn test_missing_settings_file() {
        let cli = Cli::try_parse_from(["chess-view", "--settings", "/nonexistent/settings.json"])
            .unwrap();
        let err = cli.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("reading settings file"));
    }

    #[test]
    fn test_schema_mentions_fields() {
        let schema = Settings::schema().unwrap();
        assert!(schema.contains("computer-delay-ms"));
        assert!(schema.contains("promotion-race"));
    }
}
