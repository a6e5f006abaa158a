use std::{str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

/// Error returned when a game or difficulty name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown {what} {input:?} (expected one of: {expected})")]
pub struct ParseNameError {
    what: &'static str,
    input: String,
    expected: String,
}

fn parse_name<T: Copy + std::fmt::Display>(
    what: &'static str,
    all: &[T],
    input: &str,
) -> Result<T, ParseNameError> {
    all.iter()
        .copied()
        .find(|item| item.to_string().eq_ignore_ascii_case(input))
        .ok_or_else(|| ParseNameError {
            what,
            input: input.to_owned(),
            expected: all.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
        })
}

/// Which of the two games is being played.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    /// 15×15, five in a row.
    #[default]
    #[display("gomoku")]
    Gomoku,
    /// 3×3, three in a row, at most three pieces per player.
    #[display("tic-tac-toe")]
    TicTacToe,
}

impl GameKind {
    pub const ALL: [Self; 2] = [Self::Gomoku, Self::TicTacToe];
}

impl FromStr for GameKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name("game", &Self::ALL, s)
    }
}

/// Strength of the Gomoku AI.
///
/// The tic-tac-toe AI has a single fixed strategy and ignores this setting.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[display("random")]
    Random,
    /// Wins or blocks immediate wins, otherwise random.
    #[display("easy")]
    Easy,
    /// Heuristic scoring of every empty cell.
    #[default]
    #[display("medium")]
    Medium,
    /// Not implemented; plays exactly like [`Difficulty::Medium`].
    #[display("hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Random, Self::Easy, Self::Medium, Self::Hard];

    /// The next difficulty in [`Difficulty::ALL`], wrapping around.
    #[must_use]
    pub fn cycle(self) -> Self {
        let index = Self::ALL.iter().position(|&d| d == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl FromStr for Difficulty {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name("difficulty", &Self::ALL, s)
    }
}

/// Per-game constants.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use rowline_engine::Rules;
///
/// let rules = Rules::TIC_TAC_TOE.with_ai_delay(Duration::ZERO);
/// assert_eq!(rules.board_size(), 3);
/// assert_eq!(rules.piece_cap(), Some(3));
/// assert_eq!(rules.ai_delay(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    kind: GameKind,
    board_size: usize,
    run_length: usize,
    piece_cap: Option<usize>,
    ai_delay: Duration,
    removal_delay: Duration,
}

impl Rules {
    pub const GOMOKU: Self = Self {
        kind: GameKind::Gomoku,
        board_size: 15,
        run_length: 5,
        piece_cap: None,
        ai_delay: Duration::from_millis(500),
        removal_delay: Duration::ZERO,
    };

    pub const TIC_TAC_TOE: Self = Self {
        kind: GameKind::TicTacToe,
        board_size: 3,
        run_length: 3,
        piece_cap: Some(3),
        ai_delay: Duration::from_millis(700),
        removal_delay: Duration::from_millis(400),
    };

    #[must_use]
    pub const fn for_kind(kind: GameKind) -> Self {
        match kind {
            GameKind::Gomoku => Self::GOMOKU,
            GameKind::TicTacToe => Self::TIC_TAC_TOE,
        }
    }

    #[must_use]
    pub const fn with_ai_delay(self, ai_delay: Duration) -> Self {
        Self { ai_delay, ..self }
    }

    #[must_use]
    pub const fn with_removal_delay(self, removal_delay: Duration) -> Self {
        Self {
            removal_delay,
            ..self
        }
    }

    #[must_use]
    pub const fn kind(&self) -> GameKind {
        self.kind
    }

    #[must_use]
    pub const fn board_size(&self) -> usize {
        self.board_size
    }

    /// Stones in a row needed to win.
    #[must_use]
    pub const fn run_length(&self) -> usize {
        self.run_length
    }

    /// Maximum live pieces per player, if the game enforces one.
    #[must_use]
    pub const fn piece_cap(&self) -> Option<usize> {
        self.piece_cap
    }

    /// "Thinking" pause before the AI moves.
    #[must_use]
    pub const fn ai_delay(&self) -> Duration {
        self.ai_delay
    }

    /// Pause between announcing a removal and applying it.
    #[must_use]
    pub const fn removal_delay(&self) -> Duration {
        self.removal_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_cycle_visits_all() {
        let mut difficulty = Difficulty::Random;
        let mut seen = vec![];
        for _ in 0..Difficulty::ALL.len() {
            seen.push(difficulty);
            difficulty = difficulty.cycle();
        }
        assert_eq!(seen, Difficulty::ALL);
        assert_eq!(difficulty, Difficulty::Random);
    }

    #[test]
    fn test_difficulty_serde_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        let parsed: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&GameKind::TicTacToe).unwrap(),
            "\"tic-tac-toe\""
        );
        assert_eq!(GameKind::Gomoku.to_string(), "gomoku");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("tic-tac-toe".parse(), Ok(GameKind::TicTacToe));
        assert_eq!("Hard".parse(), Ok(Difficulty::Hard));
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unknown difficulty "expert" (expected one of: random, easy, medium, hard)"#
        );
    }

    #[test]
    fn test_rules_for_kind() {
        assert_eq!(Rules::for_kind(GameKind::Gomoku), Rules::GOMOKU);
        assert_eq!(Rules::GOMOKU.run_length(), 5);
        assert_eq!(Rules::GOMOKU.piece_cap(), None);
        assert_eq!(Rules::GOMOKU.ai_delay(), Duration::from_millis(500));
        assert_eq!(Rules::TIC_TAC_TOE.ai_delay(), Duration::from_millis(700));
    }
}
