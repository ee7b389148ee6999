//! Costar Search: breadth-first shortest paths over the co-star graph.
//!
//! This crate provides the search layer for costar. It depends only on
//! `costar_kernel`; it does NOT depend on `costar_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! costar_kernel  ←  costar_search  ←  costar_harness
//! (dataset, hash)   (frontier, BFS)   (CSV, CLI, reports)
//! ```
//!
//! # Key types
//!
//! - [`node::NodeArena`]: search tree with parent links stored as handles
//! - [`frontier::Frontier`]: expansion queue (FIFO [`frontier::QueueFrontier`] for BFS)
//! - [`contract::CostarGraph`]: neighbor source the search walks
//! - [`policy::SearchPolicy`]: target check mode and optional expansion guard
//! - [`report::SearchReport`]: audit record of one search run
//! - [`path::PathStep`] / [`path::Connection`]: the result, raw and named

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod report;
pub mod search;
