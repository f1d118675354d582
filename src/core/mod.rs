//! Core game state, actions, and the pending-step clock.

#![allow(unused_imports)]

pub mod actions;
pub mod constants;
pub mod events;
pub mod game_state;
pub mod scheduler;

pub use actions::*;
pub use constants::*;
pub use events::*;
pub use game_state::*;
pub use scheduler::*;
