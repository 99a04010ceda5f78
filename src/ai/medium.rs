use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::{run_cascade, Agent, Tier};
use super::safety::{pick_avoiding_bad, DangerScope};
use super::{EngineConfig, ThreatEngine};
use crate::error::EngineError;
use crate::game::{Board, Colour};

/// Immediate wins and blocks, then n-ways for either side; the random
/// fallback avoids columns that hand the opponent a win or an n-way.
pub struct MediumAgent {
    config: EngineConfig,
    rng: StdRng,
}

impl MediumAgent {
    pub fn new(config: &EngineConfig) -> Self {
        MediumAgent {
            config: *config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(config: &EngineConfig, seed: u64) -> Self {
        MediumAgent {
            config: *config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for MediumAgent {
    fn choose_column(&mut self, board: &Board, colour: Colour) -> Result<usize, EngineError> {
        let engine = ThreatEngine::new(colour, &self.config);
        let opponent = colour.opposite();

        let tiers: [Tier<'_>; 4] = [
            ("win", &|| engine.threats(board, colour)),
            ("block win", &|| engine.threats(board, opponent)),
            ("n-way", &|| engine.n_ways(board, colour, true)),
            ("block n-way", &|| engine.n_ways(board, opponent, true)),
        ];
        match run_cascade(&engine, &tiers, &mut self.rng) {
            Some(column) => Ok(column),
            None => pick_avoiding_bad(&engine, board, DangerScope::NWays, &mut self.rng),
        }
    }

    fn name(&self) -> &str {
        "Medium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::fixtures::*;
    use crate::ai::RandomAgent;
    use crate::game::Colour::{Black, White};
    use crate::game::{GameOutcome, GameState};

    fn agent(seed: u64) -> MediumAgent {
        MediumAgent::with_seed(&EngineConfig::default(), seed)
    }

    fn always(board: &Board, colour: Colour, column: usize) {
        for seed in 0..RETRIES {
            assert_eq!(choices(&mut agent(seed), board, colour), vec![column]);
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut moves = Vec::new();
        for _ in 0..3 {
            moves.push((White, 0));
            moves.push((Black, 1));
        }
        moves.extend([(Black, 3), (Black, 5)]);
        always(&board_from(&moves), Black, 1);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let board = board_from(&[(White, 0), (White, 0), (White, 0), (Black, 3), (Black, 5)]);
        always(&board, Black, 0);
    }

    #[test]
    fn test_creates_n_way() {
        always(&open_n_way_for_black(), Black, 2);
    }

    #[test]
    fn test_prefers_own_n_way_over_opponent_threat_elsewhere() {
        //   - B - W - - B
        //   - W B W B B W
        //   W B W B W B W
        let board = board_from(&[
            (White, 0),
            (Black, 1),
            (White, 2),
            (Black, 3),
            (White, 4),
            (Black, 5),
            (White, 6),
            (White, 1),
            (Black, 2),
            (White, 3),
            (Black, 4),
            (Black, 5),
            (White, 6),
            (Black, 1),
            (White, 3),
            (Black, 6),
        ]);
        always(&board, Black, 5);
    }

    #[test]
    fn test_blocks_opponent_n_way() {
        always(&board_from(&[(White, 3), (White, 5)]), Black, 4);
    }

    #[test]
    fn test_avoids_bad_column() {
        let board = board_from(&[
            (Black, 0),
            (White, 1),
            (Black, 2),
            (White, 0),
            (White, 1),
            (White, 2),
        ]);
        for seed in 0..RETRIES {
            assert!(!choices(&mut agent(seed), &board, Black).contains(&3));
        }
    }

    #[test]
    fn test_falls_through_unblockable_n_way() {
        let board = unblockable_white_n_way();
        for seed in 0..RETRIES {
            let picked = choices(&mut agent(seed), &board, Black);
            assert!(!picked.contains(&4), "chose the hopeless block: {picked:?}");
        }
    }

    #[test]
    fn test_plays_randomly_on_empty_board() {
        let mut medium = agent(21);
        let board = Board::new();
        let first = medium.choose_column(&board, White).unwrap();
        let varied = (0..30).any(|_| medium.choose_column(&board, White).unwrap() != first);
        assert!(varied, "agent chose column {first} every time");
    }

    #[test]
    fn test_beats_random_agent() {
        let games = 20;
        let mut wins = 0;
        for game in 0..games {
            let medium_colour = if game % 2 == 0 { Black } else { White };
            let mut medium = agent(game);
            let mut random = RandomAgent::with_seed(500 + game);
            let mut state = GameState::initial();
            while !state.is_terminal() {
                let colour = state.current_colour();
                let column = if colour == medium_colour {
                    medium.choose_column(state.board(), colour)
                } else {
                    random.choose_column(state.board(), colour)
                };
                state.apply_move(column.unwrap()).unwrap();
            }
            if state.outcome() == Some(GameOutcome::Winner(medium_colour)) {
                wins += 1;
            }
        }
        assert!(wins >= 15, "Medium won only {wins}/{games} against Random");
    }

    #[test]
    fn test_name_is_medium() {
        assert_eq!(agent(0).name(), "Medium");
    }
}
