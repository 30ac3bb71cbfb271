//! Footer wisdom quote

use super::catalog::WISDOM;
use super::error::ContentResult;
use super::random::{pick, RandomSource};

/// Shown until the first quote is drawn
pub const WISDOM_PLACEHOLDER: &str = "...";

/// Draw one quote uniformly from the fixed list
pub fn random_wisdom<R: RandomSource + ?Sized>(rng: &mut R) -> ContentResult<&'static str> {
    pick(rng, &WISDOM).copied()
}

/// The quote currently on display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WisdomBoard {
    current: Option<&'static str>,
}

impl WisdomBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the quote with a fresh draw
    pub fn refresh<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> ContentResult<&'static str> {
        let quote = random_wisdom(rng)?;
        self.current = Some(quote);
        Ok(quote)
    }

    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    /// Text to render
    pub fn display(&self) -> &'static str {
        self.current.unwrap_or(WISDOM_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::random::SequenceSource;
    use std::collections::HashMap;

    #[test]
    fn test_placeholder_before_first_draw() {
        let board = WisdomBoard::new();
        assert_eq!(board.current(), None);
        assert_eq!(board.display(), "...");
    }

    #[test]
    fn test_refresh_draws_from_list() {
        let mut board = WisdomBoard::new();
        let mut rng = SequenceSource::new(vec![0.0, 0.95]);

        assert_eq!(board.refresh(&mut rng).unwrap(), "I hate Mondays.");
        assert_eq!(
            board.refresh(&mut rng).unwrap(),
            "If you want to appear smarter, hang around someone stupider."
        );
        assert_eq!(board.display(), WISDOM[9]);
    }

    #[test]
    fn test_uniform_over_quotes() {
        let rounds = 4;
        let mut rng = SequenceSource::stepping(WISDOM.len() * rounds);
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for _ in 0..WISDOM.len() * rounds {
            *counts.entry(random_wisdom(&mut rng).unwrap()).or_default() += 1;
        }

        assert_eq!(counts.len(), WISDOM.len());
        assert!(counts.values().all(|&c| c == rounds));
    }
}
