use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::{random_legal, Agent};
use crate::error::EngineError;
use crate::game::{Board, Colour};

/// An agent that selects uniformly at random from non-full columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_column(&mut self, board: &Board, _colour: Colour) -> Result<usize, EngineError> {
        random_legal(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
