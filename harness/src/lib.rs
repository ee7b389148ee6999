//! Costar Harness: loading, prompting and reporting around the search.
//!
//! The harness turns a CSV directory into a [`costar_kernel::dataset::DatasetStore`],
//! resolves typed names to person ids, runs one query through
//! `costar_search`, and renders the answer as text or canonical JSON.
//!
//! The harness does NOT implement search logic; it delegates to
//! `costar_search`. Worlds provide fixture records only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod loader;
pub mod logging;
pub mod prompt;
pub mod resolve;
pub mod runner;
pub mod worlds;
