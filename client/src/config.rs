pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{BotType, FirstPlayerMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

const MAX_PLAYER_NAME_LEN: usize = 32;

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub player_name: String,
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        let name = self.player_name.trim();
        if name.is_empty() {
            return Err("player_name must not be empty".to_string());
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(format!("player_name must not exceed {} characters", MAX_PLAYER_NAME_LEN));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    pub bot: BotType,
    pub seed: Option<u64>,
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            first_player_mode: cfg.first_player,
            bot_type: cfg.bot,
            seed: cfg.seed,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            game: GameConfig::default(),
        }
    }
}
