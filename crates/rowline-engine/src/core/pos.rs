use serde::{Deserialize, Serialize};

/// Board coordinate, `x` is the column and `y` the row, both 0-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves `steps` cells along `(dx, dy)`.
    ///
    /// Returns `None` when the result leaves a `size`×`size` board.
    #[must_use]
    pub fn step(self, (dx, dy): (isize, isize), steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let x = self.x.checked_add_signed(dx.checked_mul(steps)?)?;
        let y = self.y.checked_add_signed(dy.checked_mul(steps)?)?;
        (x < size && y < size).then_some(Self { x, y })
    }
}

/// The four line directions a run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// Unit step in the forward direction of this axis.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (1, -1),
        }
    }

    /// Unit step in the backward direction of this axis.
    #[must_use]
    pub const fn reverse_delta(self) -> (isize, isize) {
        let (dx, dy) = self.delta();
        (-dx, -dy)
    }

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
            Self::DiagonalDown => 2,
            Self::DiagonalUp => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_board() {
        let pos = Pos::new(7, 7);
        assert_eq!(pos.step((1, 0), 3, 15), Some(Pos::new(10, 7)));
        assert_eq!(pos.step((1, -1), 2, 15), Some(Pos::new(9, 5)));
        assert_eq!(pos.step((-1, -1), 7, 15), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_step_leaves_board() {
        assert_eq!(Pos::new(0, 0).step((-1, 0), 1, 3), None);
        assert_eq!(Pos::new(2, 1).step((1, 0), 1, 3), None);
        assert_eq!(Pos::new(1, 2).step((0, 1), 1, 3), None);
        assert_eq!(Pos::new(1, 0).step((1, -1), 1, 3), None);
    }

    #[test]
    fn test_reverse_delta() {
        for axis in Axis::ALL {
            let (dx, dy) = axis.delta();
            assert_eq!(axis.reverse_delta(), (-dx, -dy));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Pos::new(3, 11).to_string(), "(3, 11)");
    }
}
