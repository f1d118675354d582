//! The shadow army and the extraction ritual that grows it.

#![allow(unused_imports)]

pub mod extraction;
pub mod types;

pub use extraction::*;
pub use types::*;
