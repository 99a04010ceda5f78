use super::{Colour, GameOutcome};

/// Win/draw tally across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionHistory {
    black_wins: u64,
    white_wins: u64,
    draws: u64,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Colour::Black) => self.black_wins += 1,
            GameOutcome::Winner(Colour::White) => self.white_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, colour: Colour) -> u64 {
        match colour {
            Colour::Black => self.black_wins,
            Colour::White => self.white_wins,
        }
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn games(&self) -> u64 {
        self.black_wins + self.white_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let history = SessionHistory::new();
        assert_eq!(history.games(), 0);
        assert_eq!(history.wins(Colour::Black), 0);
    }

    #[test]
    fn test_record_outcomes() {
        let mut history = SessionHistory::new();
        history.record(GameOutcome::Winner(Colour::White));
        history.record(GameOutcome::Winner(Colour::White));
        history.record(GameOutcome::Winner(Colour::Black));
        history.record(GameOutcome::Draw);

        assert_eq!(history.wins(Colour::White), 2);
        assert_eq!(history.wins(Colour::Black), 1);
        assert_eq!(history.draws(), 1);
        assert_eq!(history.games(), 4);
    }
}
