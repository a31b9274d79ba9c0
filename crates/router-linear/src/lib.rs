//! # router-linear
//!
//! Similarity metrics and score selection for route matching.
//!
//! This crate is the linear-algebra collaborator of `router-index`: it
//! scores a query vector against a stored corpus and picks the best
//! scoring rows.
//!
//! ## Features
//! - Pluggable `Metric` trait with cosine and dot-product implementations
//! - `similarity_matrix` for scoring a query against a full corpus
//! - `top_scores` for stable top-k selection with clamping

pub mod metric;
pub mod scores;

pub use metric::{Cosine, DotProduct, Metric};
pub use scores::{similarity_matrix, top_scores};
