//! Arise - Terminal-Based Hunter RPG Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod army;
pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod gates;
pub mod items;
pub mod utils;

// UI and input modules are not exposed as they are tightly coupled to the terminal
mod input;
mod ui;

pub use crate::core::constants::TICK_INTERVAL_MS;
pub use crate::core::game_state::GameState;
