//! Built-in fixture worlds.

pub mod chain_abc;
pub mod small_cast;
pub mod synthetic;
