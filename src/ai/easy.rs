use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::{random_legal, run_cascade, Agent, Tier};
use super::{EngineConfig, ThreatEngine};
use crate::error::EngineError;
use crate::game::{Board, Colour};

/// Takes an immediate win, else blocks an immediate loss, else plays
/// at random.
pub struct EasyAgent {
    config: EngineConfig,
    rng: StdRng,
}

impl EasyAgent {
    pub fn new(config: &EngineConfig) -> Self {
        EasyAgent {
            config: *config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(config: &EngineConfig, seed: u64) -> Self {
        EasyAgent {
            config: *config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for EasyAgent {
    fn choose_column(&mut self, board: &Board, colour: Colour) -> Result<usize, EngineError> {
        let engine = ThreatEngine::new(colour, &self.config);
        let opponent = colour.opposite();

        let tiers: [Tier<'_>; 2] = [
            ("win", &|| engine.threats(board, colour)),
            ("block win", &|| engine.threats(board, opponent)),
        ];
        match run_cascade(&engine, &tiers, &mut self.rng) {
            Some(column) => Ok(column),
            None => random_legal(board, &mut self.rng),
        }
    }

    fn name(&self) -> &str {
        "Easy"
    }
}
