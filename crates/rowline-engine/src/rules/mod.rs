//! Pure queries over a [`Board`](crate::Board).
//!
//! Nothing in this module mutates the board. Hypothetical placements are
//! evaluated on a [`Probe`], a copy of the four directional rays around a
//! candidate cell.

pub use self::{moves::*, probe::*, win::*};

mod moves;
mod probe;
mod win;
