use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::{run_cascade, Agent, Tier};
use super::safety::{pick_avoiding_bad, DangerScope};
use super::{EngineConfig, ThreatEngine};
use crate::error::EngineError;
use crate::game::{Board, Colour};

/// The deepest cascade. In priority order:
///
/// 1. win immediately
/// 2. block an immediate opponent win
/// 3. create an n-way
/// 4. create a consequential win
/// 5. block an opponent n-way
/// 6. block an opponent consequential
/// 7. make a setup
/// 8. block an opponent setup
///
/// and otherwise play at random, avoiding columns that give the opponent
/// any of the above unless a forced block takes it away again.
pub struct MaxAgent {
    config: EngineConfig,
    rng: StdRng,
}

impl MaxAgent {
    pub fn new(config: &EngineConfig) -> Self {
        MaxAgent {
            config: *config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(config: &EngineConfig, seed: u64) -> Self {
        MaxAgent {
            config: *config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for MaxAgent {
    fn choose_column(&mut self, board: &Board, colour: Colour) -> Result<usize, EngineError> {
        let engine = ThreatEngine::new(colour, &self.config);
        let opponent = colour.opposite();
        engine.trace(format_args!("{colour} choosing"));

        let tiers: [Tier<'_>; 8] = [
            ("win", &|| engine.threats(board, colour)),
            ("block win", &|| engine.threats(board, opponent)),
            ("n-way", &|| engine.n_ways(board, colour, true)),
            ("consequential", &|| engine.consequentials(board, colour, true)),
            ("block n-way", &|| engine.n_ways(board, opponent, true)),
            ("block consequential", &|| {
                engine.consequentials(board, opponent, true)
            }),
            ("setup", &|| engine.setups(board, colour)),
            ("block setup", &|| engine.setups(board, opponent)),
        ];
        match run_cascade(&engine, &tiers, &mut self.rng) {
            Some(column) => Ok(column),
            None => pick_avoiding_bad(&engine, board, DangerScope::Everything, &mut self.rng),
        }
    }

    fn name(&self) -> &str {
        "Max"
    }
}
