//! # router-index
//!
//! In-memory brute-force vector index for route matching.
//!
//! Stores utterance embeddings alongside their route labels and source
//! texts, and answers nearest-neighbor queries by scoring the query
//! vector against the full corpus.
//!
//! ## Features
//! - Incremental insertion; dimension fixed by the first vector added
//! - Top-k query by cosine similarity (or any injected `Metric`)
//! - Delete-by-route that keeps vectors, routes and utterances aligned
//!
//! ## Concurrency
//! The index has no internal synchronization. Mutation takes `&mut self`;
//! shared use across threads requires external exclusion (e.g. wrap the
//! index in an `RwLock`).

pub mod error;
pub mod local;

pub use error::IndexError;
pub use local::{IndexDescription, LocalIndex, RouteMatch};
