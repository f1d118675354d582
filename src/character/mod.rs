//! The hunter: attributes, leveling, and the job awakening.

#![allow(unused_imports)]

pub mod attributes;
pub mod player;

pub use attributes::*;
pub use player::*;
