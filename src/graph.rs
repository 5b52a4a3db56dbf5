use std::collections::HashMap;
use std::ops::Range;

use crate::data_structures::SquareMatrix;
use crate::error::GraphError;
use crate::types::*;

/// directed graph over label keyed vertices with a dense edge weight table
///
/// vertices keep their registration order, which also fixes the order in which
/// the shortest path solver scans and tie-breaks them
pub struct Graph {
    labels: Vec<String>,
    ids: HashMap<String, VertexId>,
    weights: SquareMatrix<Option<Weight>>,
}

impl Graph {

    pub fn new() -> Self {
        Graph {
            labels: Vec::new(),
            ids: HashMap::new(),
            weights: SquareMatrix::empty(),
        }
    }

    /// registers a vertex under the given key and returns its id
    /// registering an already known key is a no-op that returns the existing id
    pub fn add_vertex(&mut self, key: &str) -> VertexId {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }

        let id = self.labels.len();
        self.labels.push(key.to_string());
        self.ids.insert(key.to_string(), id);

        // new row and column start out without any edges, all previously
        // registered weights stay untouched
        self.weights.grow(self.labels.len(), None);

        id
    }

    /// registers all given keys, in order
    pub fn add_vertices(&mut self, keys: &[&str]) {
        for key in keys {
            self.add_vertex(key);
        }
    }

    /// adds a directed edge between two already registered vertices
    /// the reverse direction is not touched
    pub fn add_edge(&mut self, source: &str, target: &str, weight: Weight) -> Result<(), GraphError> {
        let source_id = self.require_vertex(source)?;
        let target_id = self.require_vertex(target)?;

        self.weights.set(source_id, target_id, Some(weight));

        Ok(())
    }

    /// weight of the edge between the given keys, None if the edge does not
    /// exist, a key is unknown or both keys are equal
    pub fn weight_between(&self, source: &str, target: &str) -> Option<Weight> {
        let source_id = self.vertex_id(source)?;
        let target_id = self.vertex_id(target)?;

        self.weight(source_id, target_id)
    }

    /// weight of the edge between the given vertex ids
    pub fn weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        if source == target {
            return None;
        }

        self.weights.get(source, target)
    }

    pub fn vertex_id(&self, key: &str) -> Option<VertexId> {
        self.ids.get(key).copied()
    }

    pub fn label(&self, id: VertexId) -> &str {
        &self.labels[id]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        let mut count = 0;

        for source in self.vertex_ids() {
            for target in self.vertex_ids() {
                if self.weight(source, target).is_some() {
                    count += 1;
                }
            }
        }

        count
    }

    /// all vertex ids in registration order
    pub fn vertex_ids(&self) -> Range<VertexId> {
        0..self.labels.len()
    }

    pub fn print(&self) {
        for source in self.vertex_ids() {
            for target in self.vertex_ids() {
                if let Some(weight) = self.weight(source, target) {
                    println!("edge from {} to {} with weight: {}", self.labels[source], self.labels[target], weight);
                }
            }
        }
    }

    fn require_vertex(&self, key: &str) -> Result<VertexId, GraphError> {
        self.vertex_id(key).ok_or_else(|| GraphError::VertexNotFound(key.to_string()))
    }
}

impl Default for Graph {

    fn default() -> Self {
        Graph::new()
    }
}
