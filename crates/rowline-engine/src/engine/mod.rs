//! Game flow on top of the board and rules.
//!
//! [`GameController`] owns one [`GameSession`] at a time and serializes every
//! state change: human moves, AI turns, pending removals and game end. Delays
//! between those steps are the host's business; the controller describes them
//! as [`ScheduledTask`]s and picks up again in [`GameController::run_task`].
//!
//! Randomness is injected through [`RandomSource`], either seeded from a
//! [`GameSeed`] for reproducible games or scripted for tests.

pub use self::{
    controller::*, random::*, removal::*, schedule::*, seed::*, session::*, status::*, variant::*,
};

mod controller;
mod random;
mod removal;
mod schedule;
mod seed;
mod session;
mod status;
mod variant;
