//! Item system: the shop catalog, equipment, and consumables.

#![allow(unused_imports)]

pub mod catalog;
pub mod logic;
pub mod types;

pub use catalog::*;
pub use logic::*;
pub use types::*;
