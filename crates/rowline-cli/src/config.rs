use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use rowline_engine::{Difficulty, GameKind, GameSeed, Rules};
use serde::{Deserialize, Serialize};

/// Settings read from a JSON configuration file.
///
/// Every field is optional; missing fields fall back to the game defaults.
///
/// ```json
/// {
///   "difficulty": "hard",
///   "seed": "0123456789abcdef0123456789abcdef",
///   "ai_delay_ms": 300,
///   "removal_delay_ms": 400,
///   "log_file": "rowline.log"
/// }
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) seed: Option<GameSeed>,
    pub(crate) ai_delay_ms: Option<u64>,
    pub(crate) removal_delay_ms: Option<u64>,
    pub(crate) log_file: Option<PathBuf>,
}

impl ConfigFile {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Game settings shared by every command.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SettingsArg {
    /// AI difficulty: random, easy, medium or hard (Gomoku only)
    #[clap(long)]
    pub(crate) difficulty: Option<Difficulty>,
    /// Seed for every random choice, as 32 hex digits
    #[clap(long)]
    pub(crate) seed: Option<GameSeed>,
    /// JSON file with default settings; flags take precedence
    #[clap(long)]
    pub(crate) config: Option<PathBuf>,
    /// Pause before the AI moves, in milliseconds
    #[clap(long)]
    pub(crate) ai_delay_ms: Option<u64>,
    /// Pause before an old piece disappears, in milliseconds
    #[clap(long)]
    pub(crate) removal_delay_ms: Option<u64>,
}

/// Settings after merging the config file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) difficulty: Difficulty,
    pub(crate) seed: Option<GameSeed>,
    pub(crate) ai_delay: Option<Duration>,
    pub(crate) removal_delay: Option<Duration>,
    pub(crate) log_file: Option<PathBuf>,
}

impl SettingsArg {
    /// Loads the config file, if any, and applies the flags on top.
    pub(crate) fn resolve(&self) -> anyhow::Result<Settings> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Ok(self.merge(file))
    }

    fn merge(&self, file: ConfigFile) -> Settings {
        Settings {
            difficulty: self.difficulty.or(file.difficulty).unwrap_or_default(),
            seed: self.seed.or(file.seed),
            ai_delay: self.ai_delay_ms.or(file.ai_delay_ms).map(Duration::from_millis),
            removal_delay: self
                .removal_delay_ms
                .or(file.removal_delay_ms)
                .map(Duration::from_millis),
            log_file: file.log_file,
        }
    }
}

impl Settings {
    /// Rules for `kind` with the configured delays applied.
    pub(crate) fn rules(&self, kind: GameKind) -> Rules {
        let mut rules = Rules::for_kind(kind);
        if let Some(delay) = self.ai_delay {
            rules = rules.with_ai_delay(delay);
        }
        if let Some(delay) = self.removal_delay {
            rules = rules.with_removal_delay(delay);
        }
        rules
    }
}
