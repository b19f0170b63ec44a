//! Configuration management for the Formic shell.

use anyhow::{ensure, Context, Result};
use formic::prelude::{ColonyBuilder, ColonyConfig, InsectCategory, Position, Registry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for in the current and parent directories.
pub const CONFIG_FILE: &str = "formic.toml";

/// Formic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub colony: ColonyConfig,
    #[serde(default = "default_seeds")]
    pub seed: Vec<SeedColony>,
    #[serde(default)]
    pub shell: ShellConfig,
}

/// A colony created before the first command is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedColony {
    pub kind: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub workers: usize,
    #[serde(default)]
    pub fighters: usize,
    #[serde(default)]
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

// Default value functions
fn default_prompt() -> String { "Enter a command: ".to_string() }

fn default_seeds() -> Vec<SeedColony> {
    vec![
        SeedColony::new("Aggressive", 0, 0),
        SeedColony::new("Harvester", 10, 20),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colony: ColonyConfig::default(),
            seed: default_seeds(),
            shell: ShellConfig::default(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl SeedColony {
    pub fn new(kind: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            kind: kind.into(),
            x,
            y,
            workers: 0,
            fighters: 0,
            sections: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, or from formic.toml in the current
    /// or parent directories, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match find_config_file() {
                Some(path) => Self::from_file(&path),
                None => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Check values the engine relies on but serde cannot express.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.colony.food_per_tick > 0,
            "colony.food_per_tick must be positive, got {}",
            self.colony.food_per_tick
        );
        Ok(())
    }

    /// Generate default config as TOML string.
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize config")
    }

    /// Build a registry with this config's colony settings and seed colonies.
    pub fn build_registry(&self, seed: bool) -> Registry {
        let mut registry = Registry::with_config(self.colony);
        if seed {
            for colony in &self.seed {
                let built = colony
                    .sections
                    .iter()
                    .fold(
                        ColonyBuilder::new(&colony.kind, Position::new(colony.x, colony.y)),
                        |builder, name| builder.section(name),
                    )
                    .with_config(self.colony)
                    .insects(InsectCategory::Worker, colony.workers)
                    .insects(InsectCategory::Fighter, colony.fighters)
                    .build();
                registry.adopt(built);
            }
        }
        registry
    }
}

/// Find formic.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
