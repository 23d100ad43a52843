use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Random,
    Human,
    Ai,
}

impl FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(FirstPlayerMode::Random),
            "human" => Ok(FirstPlayerMode::Human),
            "ai" => Ok(FirstPlayerMode::Ai),
            other => Err(format!("Unknown first player mode '{}', expected random, human or ai", other)),
        }
    }
}

impl fmt::Display for FirstPlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstPlayerMode::Random => write!(f, "random"),
            FirstPlayerMode::Human => write!(f, "human"),
            FirstPlayerMode::Ai => write!(f, "ai"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(BotType::Minimax),
            "random" => Ok(BotType::Random),
            other => Err(format!("Unknown bot type '{}', expected minimax or random", other)),
        }
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Minimax => write!(f, "minimax"),
            BotType::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicTacToeSessionSettings {
    pub first_player_mode: FirstPlayerMode,
    pub bot_type: BotType,
    pub seed: Option<u64>,
}
