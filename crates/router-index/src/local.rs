//! Brute-force local vector index.
//!
//! Keeps three positionally aligned sequences (vectors, routes,
//! utterances) and scores queries against the full corpus.

use router_linear::{similarity_matrix, top_scores, Cosine, Metric};
use serde::Serialize;
use tracing::debug;

use crate::error::IndexError;

/// One query hit: a route label and its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    /// Route label of the matched entry
    pub route: String,
    /// Similarity score (higher = more similar)
    pub score: f32,
}

impl RouteMatch {
    pub fn new(route: String, score: f32) -> Self {
        Self { route, score }
    }
}

/// Index shape summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDescription {
    /// Index kind, always "local" for this implementation
    #[serde(rename = "type")]
    pub index_type: &'static str,
    /// Per-vector dimensionality (0 when empty)
    pub dimensions: usize,
    /// Number of stored entries (0 when empty)
    pub vectors: usize,
}

/// Aligned row storage.
///
/// Invariant: all three sequences are non-empty and the same length,
/// and every vector has the same dimension.
struct Rows {
    vectors: Vec<Vec<f32>>,
    routes: Vec<String>,
    utterances: Vec<String>,
}

impl Rows {
    fn dimension(&self) -> usize {
        self.vectors.first().map_or(0, Vec::len)
    }
}

/// Empty until the first add establishes the dimension.
enum State {
    Empty,
    Populated(Rows),
}

/// In-memory vector index mapping utterance embeddings to routes.
///
/// Not synchronized; concurrent use requires external exclusion.
pub struct LocalIndex {
    state: State,
    metric: Box<dyn Metric>,
}

impl LocalIndex {
    /// Create an empty index scoring with cosine similarity.
    pub fn new() -> Self {
        Self::with_metric(Box::new(Cosine))
    }

    /// Create an empty index with an injected scoring strategy.
    pub fn with_metric(metric: Box<dyn Metric>) -> Self {
        Self {
            state: State::Empty,
            metric,
        }
    }

    /// Get the established vector dimension (0 when empty).
    pub fn dimension(&self) -> usize {
        match &self.state {
            State::Empty => 0,
            State::Populated(rows) => rows.dimension(),
        }
    }

    /// Get the number of stored entries.
    pub fn len(&self) -> usize {
        match &self.state {
            State::Empty => 0,
            State::Populated(rows) => rows.routes.len(),
        }
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add one (route, utterance, vector) entry.
    ///
    /// The first add establishes the index dimension; every later add
    /// must match it.
    pub fn add(
        &mut self,
        route: impl Into<String>,
        utterance: impl Into<String>,
        vector: Vec<f32>,
    ) -> Result<(), IndexError> {
        match &mut self.state {
            State::Empty => {
                debug!(dim = vector.len(), "First entry establishes dimension");
                self.state = State::Populated(Rows {
                    vectors: vec![vector],
                    routes: vec![route.into()],
                    utterances: vec![utterance.into()],
                });
            }
            State::Populated(rows) => {
                let expected = rows.dimension();
                if vector.len() != expected {
                    return Err(IndexError::DimensionMismatch {
                        expected,
                        actual: vector.len(),
                    });
                }
                rows.vectors.push(vector);
                rows.routes.push(route.into());
                rows.utterances.push(utterance.into());
            }
        }
        Ok(())
    }

    /// Get all (route, utterance) pairs in insertion order.
    ///
    /// Returns an owned snapshot; later mutation does not affect it.
    pub fn get_routes(&self) -> Vec<(String, String)> {
        match &self.state {
            State::Empty => Vec::new(),
            State::Populated(rows) => rows
                .routes
                .iter()
                .cloned()
                .zip(rows.utterances.iter().cloned())
                .collect(),
        }
    }

    /// Describe the index shape.
    pub fn describe(&self) -> IndexDescription {
        IndexDescription {
            index_type: "local",
            dimensions: self.dimension(),
            vectors: self.len(),
        }
    }

    /// Query for the `top_k` most similar routes.
    ///
    /// Results come back in descending score order, ties stable by
    /// insertion order. `top_k` larger than the entry count clamps to
    /// the available count.
    pub fn query(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<RouteMatch>, IndexError> {
        let rows = match &self.state {
            State::Empty => return Err(IndexError::NotPopulated),
            State::Populated(rows) => rows,
        };

        let expected = rows.dimension();
        if query_vector.len() != expected {
            return Err(IndexError::DimensionMismatch {
                expected,
                actual: query_vector.len(),
            });
        }

        let scores = similarity_matrix(query_vector, &rows.vectors, self.metric.as_ref());
        let (top, indices) = top_scores(&scores, top_k);

        let matches: Vec<RouteMatch> = top
            .into_iter()
            .zip(indices)
            .map(|(score, i)| RouteMatch::new(rows.routes[i].clone(), score))
            .collect();

        debug!(k = top_k, found = matches.len(), "Query complete");
        Ok(matches)
    }

    /// Delete every entry whose route equals `route_name`.
    ///
    /// Returns the number of entries removed; no match is a no-op, not
    /// an error. Removing the last entry returns the index to the
    /// empty state (dimension forgotten).
    pub fn delete(&mut self, route_name: &str) -> Result<usize, IndexError> {
        let rows = match std::mem::replace(&mut self.state, State::Empty) {
            State::Empty => return Err(IndexError::NotPopulated),
            State::Populated(rows) => rows,
        };

        let before = rows.routes.len();
        let mut vectors = Vec::with_capacity(before);
        let mut routes = Vec::with_capacity(before);
        let mut utterances = Vec::with_capacity(before);

        // One pass over the zipped triples keeps all three sequences
        // aligned regardless of where matches sit.
        for ((vector, route), utterance) in rows
            .vectors
            .into_iter()
            .zip(rows.routes)
            .zip(rows.utterances)
        {
            if route != route_name {
                vectors.push(vector);
                routes.push(route);
                utterances.push(utterance);
            }
        }

        let removed = before - routes.len();
        debug!(
            route = route_name,
            removed = removed,
            remaining = routes.len(),
            "Delete complete"
        );

        if !routes.is_empty() {
            self.state = State::Populated(Rows {
                vectors,
                routes,
                utterances,
            });
        }
        Ok(removed)
    }
}

impl Default for LocalIndex {
    fn default() -> Self {
        Self::new()
    }
}
