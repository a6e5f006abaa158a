use serde::{Deserialize, Serialize};

/// One of the two seats at the board.
///
/// The human always moves first. In Gomoku the human plays black and the AI
/// white; in tic-tac-toe the human is `X` and the AI is `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::Human, Self::Ai];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Ai => 1,
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}
