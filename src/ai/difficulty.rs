use std::fmt;
use std::str::FromStr;

use super::{Agent, EasyAgent, EngineConfig, MaxAgent, MediumAgent, RandomAgent};
use crate::error::ParsePlayerError;

/// The four computer strategies, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Random,
    Easy,
    Medium,
    Max,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Random,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Max,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Random => "random",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Max => "max",
        }
    }

    /// Build the agent for this difficulty, seeded for reproducible play
    /// when `seed` is given.
    pub fn build_agent(self, config: &EngineConfig, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (Difficulty::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
            (Difficulty::Random, None) => Box::new(RandomAgent::new()),
            (Difficulty::Easy, Some(seed)) => Box::new(EasyAgent::with_seed(config, seed)),
            (Difficulty::Easy, None) => Box::new(EasyAgent::new(config)),
            (Difficulty::Medium, Some(seed)) => Box::new(MediumAgent::with_seed(config, seed)),
            (Difficulty::Medium, None) => Box::new(MediumAgent::new(config)),
            (Difficulty::Max, Some(seed)) => Box::new(MaxAgent::with_seed(config, seed)),
            (Difficulty::Max, None) => Box::new(MaxAgent::new(config)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePlayerError(s.to_string()))
    }
}

/// Who controls a colour. Every variant names a playable controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerKind {
    Human,
    Computer(Difficulty),
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Computer(difficulty) => write!(f, "{difficulty}"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            return Ok(PlayerKind::Human);
        }
        s.parse().map(PlayerKind::Computer)
    }
}

impl TryFrom<String> for PlayerKind {
    type Error = ParsePlayerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlayerKind> for String {
    fn from(kind: PlayerKind) -> Self {
        kind.to_string()
    }
}
