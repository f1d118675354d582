//! Gate ranks and the monster pools that spawn inside them.

mod data;

#[allow(unused_imports)]
pub use data::*;
