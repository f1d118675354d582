//! Utility modules: debug menu.

#![allow(unused_imports)]

pub mod debug_menu;

pub use debug_menu::*;
