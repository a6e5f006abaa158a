use std::fmt;

use rand::Rng as _;
use rand_pcg::Pcg32;

use super::GameSeed;

/// Source of uniform random numbers for move selection and removals.
///
/// Every random decision in the engine and the AI goes through this trait so
/// that games can be replayed from a [`GameSeed`] and tests can script exact
/// sequences with [`ScriptedRandom`].
pub trait RandomSource: fmt::Debug {
    /// Returns a value uniformly distributed in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;

    /// Returns an index uniformly distributed in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len - 1)
    }
}

impl dyn RandomSource + '_ {
    /// Picks one item uniformly, or `None` if `items` is empty.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.pick_index(items.len())])
    }
}

/// Independent random streams derived from one [`GameSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomStream {
    /// Move selection of the AI seat.
    Ai,
    /// The removal policy of the bounded game.
    Removal,
    /// An AI standing in for the human seat (headless simulation).
    HumanSeat,
}

impl RandomStream {
    const fn id(self) -> u64 {
        match self {
            Self::Ai => 1,
            Self::Removal => 2,
            Self::HumanSeat => 3,
        }
    }
}

/// PCG-backed random source.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    /// Creates the `stream` source for `seed`.
    ///
    /// Different streams of the same seed produce unrelated sequences.
    #[must_use]
    pub fn from_seed(seed: GameSeed, stream: RandomStream) -> Self {
        let (state, increment) = seed.words();
        Self {
            rng: Pcg32::new(state, increment ^ stream.id().rotate_right(8)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Replays a fixed list of values, cycling when it runs out.
///
/// # Example
///
/// ```
/// use rowline_engine::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new([0.9, 0.1]);
/// assert_eq!(rng.pick_index(4), 3);
/// assert_eq!(rng.pick_index(4), 0);
/// assert_eq!(rng.next_unit(), 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// # Panics
    ///
    /// Panics if `values` is empty or contains a value outside `[0.0, 1.0)`.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<_> = values.into_iter().collect();
        assert!(!values.is_empty(), "scripted sequence must not be empty");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "scripted values must lie in [0.0, 1.0)"
        );
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = GameSeed::from_bytes([7; 16]);
        let mut a = SeededRandom::from_seed(seed, RandomStream::Ai);
        let mut b = SeededRandom::from_seed(seed, RandomStream::Ai);
        for _ in 0..32 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
        }
    }

    #[test]
    fn test_streams_differ() {
        let seed = GameSeed::from_bytes([7; 16]);
        let mut ai = SeededRandom::from_seed(seed, RandomStream::Ai);
        let mut removal = SeededRandom::from_seed(seed, RandomStream::Removal);
        let ai_values: Vec<_> = (0..8).map(|_| ai.next_unit().to_bits()).collect();
        let removal_values: Vec<_> = (0..8).map(|_| removal.next_unit().to_bits()).collect();
        assert_ne!(ai_values, removal_values);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = SeededRandom::from_seed(rand::rng().random(), RandomStream::Ai);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
            assert!(rng.pick_index(3) < 3);
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new([0.25, 0.75]);
        let values: Vec<_> = (0..5).map(|_| rng.next_unit()).collect();
        assert_eq!(values, [0.25, 0.75, 0.25, 0.75, 0.25]);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn test_choose() {
        let rng: &mut dyn RandomSource = &mut ScriptedRandom::new([0.5]);
        assert_eq!(rng.choose(&['a', 'b', 'c', 'd']), Some('c'));
        assert_eq!(rng.choose::<char>(&[]), None);
    }
}
