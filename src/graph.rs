//! A module for working with graphs.

use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use nalgebra::DMatrix;
use tracing::debug;

use crate::{distance, edge::Edge, error::GraphError};

/// A directed graph described by an ordered vertex sequence and an edge list.
///
/// The position of a vertex in the sequence supplied at construction is its
/// index into every matrix and vector this type produces; the sequence is
/// never reordered.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    /// The vertices, in the order supplied at construction.
    vertices: Vec<T>,
    /// The directed edges. Adjacency queries scan this list linearly; the
    /// graphs this crate targets are small and static, so no lookup index is
    /// built.
    edges: Vec<Edge<T>>,
    /// Cache the cost matrix when possible.
    adjacency_matrix: Option<DMatrix<f64>>,
    /// Cache the converged distance matrix when possible.
    distance_matrix: Option<DMatrix<f64>>,
}

impl<T> Graph<T>
where
    T: Copy + Eq + Hash + Debug,
{
    /// Creates a graph from an ordered vertex sequence and an edge list.
    ///
    /// Redundant edges between the same ordered pair are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if the vertex sequence is empty,
    /// [`GraphError::DuplicateVertex`] if a label repeats and
    /// [`GraphError::UnknownVertex`] if an edge references a vertex absent
    /// from the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let graph = Graph::new(vec!["a", "b"], vec![Edge::new("a", "b")]);
    /// assert!(graph.is_ok());
    /// ```
    pub fn new(vertices: Vec<T>, edges: Vec<Edge<T>>) -> Result<Self, GraphError> {
        if vertices.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut seen = HashSet::with_capacity(vertices.len());
        for vertex in &vertices {
            if !seen.insert(*vertex) {
                return Err(GraphError::duplicate_vertex(vertex));
            }
        }

        let mut graph = Self {
            vertices,
            edges: Vec::new(),
            adjacency_matrix: None,
            distance_matrix: None,
        };

        for edge in edges {
            graph.insert(edge)?;
        }

        Ok(graph)
    }

    /// Inserts an edge into the graph and returns whether it was new.
    ///
    /// Inserting an edge between an already-connected ordered pair is a
    /// no-op, whatever its weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either endpoint is absent
    /// from the vertex sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let mut graph = Graph::new(vec!["a", "b"], vec![])?;
    ///
    /// assert_eq!(graph.insert(Edge::new("a", "b"))?, true);
    /// assert_eq!(graph.insert(Edge::new("a", "b"))?, false);
    /// # Ok::<(), centra::error::GraphError>(())
    /// ```
    pub fn insert(&mut self, edge: Edge<T>) -> Result<bool, GraphError> {
        for vertex in [edge.source(), edge.target()] {
            if self.index_of(vertex).is_none() {
                return Err(GraphError::unknown_vertex(vertex));
            }
        }

        if self.edges.contains(&edge) {
            return Ok(false);
        }

        self.edges.push(edge);

        // Delete the cached matrices: they can't reliably be updated from the
        // new connection alone.
        if self.adjacency_matrix.is_some() || self.distance_matrix.is_some() {
            self.clear_cache();
        }

        Ok(true)
    }

    /// Inserts unit-weight edges in both directions between the two vertices,
    /// for graphs whose connections are bidirectional.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either vertex is absent from
    /// the vertex sequence.
    pub fn insert_symmetric(&mut self, a: T, b: T) -> Result<(), GraphError> {
        let edge = Edge::new(a, b);

        self.insert(edge.reversed())?;
        self.insert(edge)?;

        Ok(())
    }

    /// Returns the vertices in index order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the matrix index of a vertex: its position in the sequence
    /// supplied at construction.
    pub fn index_of(&self, vertex: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    /// Returns whether a directed edge runs from `source` to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let graph = Graph::new(vec!["a", "b"], vec![Edge::new("a", "b")])?;
    ///
    /// assert_eq!(graph.is_adjacent(&"a", &"b"), true);
    /// assert_eq!(graph.is_adjacent(&"b", &"a"), false);
    /// # Ok::<(), centra::error::GraphError>(())
    /// ```
    pub fn is_adjacent(&self, source: &T, target: &T) -> bool {
        self.edge_weight(source, target).is_some()
    }

    /// Constructs the cost matrix for this graph: `0` on the diagonal, the
    /// edge weight for adjacent ordered pairs and `f64::INFINITY` where no
    /// direct edge exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let mut graph = Graph::new(vec!["a", "b"], vec![Edge::new("a", "b")])?;
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              f64::INFINITY, 0.0]
    /// );
    /// # Ok::<(), centra::error::GraphError>(())
    /// ```
    pub fn adjacency_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.adjacency_matrix.clone() {
            return matrix;
        }

        let n = self.vertices.len();
        debug!(
            vertices = n,
            edges = self.edges.len(),
            "building adjacency matrix"
        );

        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for (i, source) in self.vertices.iter().enumerate() {
            for (j, target) in self.vertices.iter().enumerate() {
                // The diagonal stays at zero: a vertex is at distance 0 from
                // itself, even when a self-loop was supplied.
                if i == j {
                    continue;
                }

                matrix[(i, j)] = self.edge_weight(source, target).unwrap_or(f64::INFINITY);
            }
        }

        // Cache the matrix.
        self.adjacency_matrix = Some(matrix.clone());

        matrix
    }

    /// Constructs the all-pairs shortest-distance matrix for this graph.
    ///
    /// The relaxation runs on a copy, so [`Graph::adjacency_matrix`] keeps
    /// returning the unrelaxed cost matrix afterwards. Pairs with no
    /// connecting path keep `f64::INFINITY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let mut graph = Graph::new(
    ///     vec!["a", "b", "c"],
    ///     vec![Edge::new("a", "b"), Edge::new("b", "c")],
    /// )?;
    ///
    /// let distances = graph.distance_matrix();
    /// assert_eq!(distances[(0, 2)], 2.0);
    /// # Ok::<(), centra::error::GraphError>(())
    /// ```
    pub fn distance_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.distance_matrix.clone() {
            return matrix;
        }

        let mut matrix = self.adjacency_matrix();

        debug!(n = matrix.nrows(), "relaxing distance matrix");
        distance::floyd_warshall(&mut matrix);

        // Cache the matrix.
        self.distance_matrix = Some(matrix.clone());

        matrix
    }

    /// Returns the shortest distance from `source` to `target`, or `None` if
    /// either vertex is absent from the graph.
    ///
    /// An unreachable pair yields `Some(f64::INFINITY)`, not `None`.
    pub fn distance(&mut self, source: &T, target: &T) -> Option<f64> {
        let i = self.index_of(source)?;
        let j = self.index_of(target)?;

        Some(self.distance_matrix()[(i, j)])
    }

    /// Returns a mapping of vertices to their eccentricity, the maximum
    /// shortest-path distance from that vertex to any other.
    ///
    /// A vertex with an unreachable peer has eccentricity `f64::INFINITY`.
    pub fn eccentricities(&mut self) -> HashMap<T, f64> {
        let distance_matrix = self.distance_matrix();

        self.vertices
            .iter()
            .copied()
            .zip(distance::eccentricities(&distance_matrix))
            .collect()
    }

    /// Returns the radius and diameter of the graph: the minimum and maximum
    /// eccentricity over all vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let mut graph = Graph::new(vec!["a", "b"], vec![])?;
    /// graph.insert_symmetric("a", "b")?;
    ///
    /// assert_eq!(graph.radius_diameter(), (1.0, 1.0));
    /// # Ok::<(), centra::error::GraphError>(())
    /// ```
    pub fn radius_diameter(&mut self) -> (f64, f64) {
        let distance_matrix = self.distance_matrix();

        distance::radius_diameter(&distance::eccentricities(&distance_matrix))
    }

    /// Returns the center of the graph: the vertices whose eccentricity
    /// equals the radius, in index order.
    pub fn center(&mut self) -> Vec<T> {
        let distance_matrix = self.distance_matrix();
        let eccentricities = distance::eccentricities(&distance_matrix);
        let (radius, _) = distance::radius_diameter(&eccentricities);

        distance::center(&eccentricities, radius)
            .into_iter()
            .map(|i| self.vertices[i])
            .collect()
    }

    //
    // Private
    //

    /// Clears the computed state.
    ///
    /// This must be called every time the edge set is mutated since the
    /// cached matrices won't correspond to the new graph.
    fn clear_cache(&mut self) {
        self.adjacency_matrix = None;
        self.distance_matrix = None;
    }

    /// Returns the weight of the directed edge from `source` to `target`, by
    /// linear scan over the edge list.
    fn edge_weight(&self, source: &T, target: &T) -> Option<f64> {
        self.edges
            .iter()
            .find(|edge| edge.source() == source && edge.target() == target)
            .map(Edge::weight)
    }
}
