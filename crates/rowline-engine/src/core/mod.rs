pub use self::{board::*, cell::*, pos::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod pos;
