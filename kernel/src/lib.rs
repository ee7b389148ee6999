//! Costar Kernel: the in-memory dataset and canonical hashing for costar.
//!
//! # API Surface
//!
//! - [`dataset::store::DatasetStore::load`] -- build the store from people, movie and cast records
//! - [`dataset::store::DatasetStore::neighbors`] -- resolve co-stars of a person
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `proof` ← `dataset`
//!
//! One-way only. `dataset` uses `proof` for its content digest; `proof`
//! depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dataset;
pub mod proof;
