//! Proof module: canonical JSON and content hashing.
//!
//! Depends on nothing internal. `dataset` and downstream crates route every
//! digest through here.

pub mod canon;
pub mod hash;
