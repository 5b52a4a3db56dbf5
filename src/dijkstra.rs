use crate::error::GraphError;
use crate::graph::Graph;
use crate::types::*;

/// single source shortest paths over a bound graph using the label setting
/// variant of dijkstra's algorithm with a linear selection scan
///
/// the linear scan keeps the selection order deterministic: ties between
/// vertices with equal distance always resolve towards the vertex that was
/// registered first
pub struct ShortestPathSolver<'a> {
    graph: &'a Graph,
}

impl<'a> ShortestPathSolver<'a> {

    pub fn new(graph: &'a Graph) -> Self {
        ShortestPathSolver { graph }
    }

    /// computes shortest distances and paths from the given source vertex
    ///
    /// every call allocates fresh run state, so a solver can be reused for any
    /// number of queries against the same graph
    pub fn solve(&self, source: &str) -> Result<ShortestPathTree<'a>, GraphError> {
        self.solve_with_observer(source, |_, _| {})
    }

    /// same as solve, but invokes the given observer once per selection round
    /// with the just finalized vertex and the current distance table
    pub fn solve_with_observer<F>(&self, source: &str, mut observer: F) -> Result<ShortestPathTree<'a>, GraphError>
    where
        F: FnMut(VertexId, &[Weight]),
    {
        let source_id = self
            .graph
            .vertex_id(source)
            .ok_or_else(|| GraphError::VertexNotFound(source.to_string()))?;

        let num_vertices = self.graph.num_vertices();

        let mut distances: Vec<Weight> = vec![INFINITY; num_vertices];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; num_vertices];
        let mut visited: Vec<bool> = vec![false; num_vertices];
        let mut visit_order: Vec<VertexId> = Vec::with_capacity(num_vertices);

        distances[source_id] = 0;

        // one selection round per vertex, also for vertices that turn out to
        // be unreachable
        while let Some(closest) = Self::closest_unvisited(&distances, &visited) {
            visited[closest] = true;
            visit_order.push(closest);

            // an infinite selection cannot improve any neighbour
            if distances[closest] != INFINITY {
                for target in self.graph.vertex_ids() {
                    if visited[target] {
                        continue;
                    }

                    if let Some(weight) = self.graph.weight(closest, target) {
                        let relaxed = distances[closest] + weight;

                        if relaxed < distances[target] {
                            distances[target] = relaxed;
                            predecessors[target] = Some(closest);
                        }
                    }
                }
            }

            observer(closest, &distances);
        }

        Ok(ShortestPathTree {
            graph: self.graph,
            source: source_id,
            distances,
            predecessors,
            visit_order,
        })
    }

    /// scans all unvisited vertices in registration order and returns the one
    /// with the smallest distance, the first encountered wins equal distances
    fn closest_unvisited(distances: &[Weight], visited: &[bool]) -> Option<VertexId> {
        let mut closest: Option<VertexId> = None;

        for vertex in 0..distances.len() {
            if visited[vertex] {
                continue;
            }

            match closest {
                None => closest = Some(vertex),
                Some(best) if distances[vertex] < distances[best] => closest = Some(vertex),
                Some(_) => {}
            }
        }

        closest
    }
}

/// the result of a single solve call: final distances, predecessor pointers
/// and the order in which vertices were finalized
pub struct ShortestPathTree<'a> {
    graph: &'a Graph,
    source: VertexId,
    distances: Vec<Weight>,
    predecessors: Vec<Option<VertexId>>,
    visit_order: Vec<VertexId>,
}

impl<'a> ShortestPathTree<'a> {

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// distance from the source to the given vertex, INFINITY if unreachable
    pub fn distance(&self, vertex: VertexId) -> Weight {
        self.distances[vertex]
    }

    /// distance from the source to the given key, None for unknown keys
    pub fn distance_to(&self, key: &str) -> Option<Weight> {
        self.graph.vertex_id(key).map(|vertex| self.distances[vertex])
    }

    pub fn is_reachable(&self, key: &str) -> bool {
        self.distance_to(key).map_or(false, |distance| distance != INFINITY)
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// vertices in the order they were finalized
    pub fn visit_order(&self) -> &[VertexId] {
        &self.visit_order
    }

    /// reconstructs the shortest path to the given vertex by walking the
    /// predecessor chain backwards from it
    /// the path contains both endpoints, unreachable vertices have no path
    pub fn path(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if self.distances[vertex] == INFINITY {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;

        while let Some(predecessor) = self.predecessors[current] {
            path.push(predecessor);
            current = predecessor;
        }

        path.reverse();

        Some(path)
    }

    /// path to the given key as vertex labels
    pub fn path_to(&self, key: &str) -> Option<Vec<&str>> {
        let vertex = self.graph.vertex_id(key)?;

        self.path(vertex)
            .map(|path| path.iter().map(|&id| self.graph.label(id)).collect())
    }
}
