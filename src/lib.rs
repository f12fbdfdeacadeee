//! Centra is a small toolkit for analysing shortest-path structure in directed
//! graphs: all-pairs distances, per-vertex eccentricity, radius, diameter and
//! the centre.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure which
//! is constructed from an ordered vertex sequence and a list of
//! [`Edge`](edge::Edge) instances. The position of a vertex in the sequence is
//! its index into every matrix the graph produces. Once constructed, the
//! all-pairs distance matrix and the measurements derived from it can be
//! computed.
//!
//! ```rust
//! use centra::{edge::Edge, graph::Graph};
//!
//! // Station identifiers; their order fixes the matrix indexing.
//! let vertices = vec![1200, 1201, 1202];
//!
//! // Connect the stations in a line, in both directions.
//! let edges = vec![
//!     Edge::new(1200, 1201),
//!     Edge::new(1201, 1200),
//!     Edge::new(1201, 1202),
//!     Edge::new(1202, 1201),
//! ];
//!
//! let mut graph = Graph::new(vertices, edges)?;
//!
//! // All-pairs shortest distances, by Floyd-Warshall relaxation.
//! let distances = graph.distance_matrix();
//! assert_eq!(distances[(0, 2)], 2.0);
//!
//! // The middle station is the centre of the line.
//! assert_eq!(graph.radius_diameter(), (1.0, 2.0));
//! assert_eq!(graph.center(), vec![1201]);
//!
//! // Matrices can be pretty printed...
//! println!("{}", graph.adjacency_matrix());
//! // ...outputs:
//! //  ┌             ┐
//! //  │   0   1 inf │
//! //  │   1   0   1 │
//! //  │ inf   1   0 │
//! //  └             ┘
//! # Ok::<(), centra::error::GraphError>(())
//! ```
//!
//! Pairs with no connecting path keep the distance `f64::INFINITY`, which
//! also propagates into the eccentricity of any vertex with an unreachable
//! peer.

pub mod edge;
pub mod error;
pub mod graph;

mod distance;
