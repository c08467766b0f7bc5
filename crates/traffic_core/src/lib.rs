//! Shortest paths over a small undirected traffic network.
//!
//! The crate models a fixed set of intersections connected by weighted
//! roads and answers single-source shortest-path queries with Dijkstra's
//! algorithm.
//!
//! # Basic usage
//! ```
//! use traffic_core::graph::{node_index, RoadNetwork};
//! use traffic_core::search::dijkstra::Dijkstra;
//!
//! // Three intersections connected in a line
//! let mut network = RoadNetwork::with_intersections(3);
//! network.add_road(node_index(0), node_index(1), 4)?;
//! network.add_road(node_index(1), node_index(2), 2)?;
//!
//! let mut dijkstra = Dijkstra::new(&network);
//! let paths = dijkstra.shortest_paths(node_index(0))?;
//!
//! assert_eq!(paths.distance(node_index(2)), Some(6));
//! # Ok::<(), traffic_core::error::NetworkError>(())
//! ```
//! [`RoadNetwork`]: crate::graph::RoadNetwork
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod simulation;
pub mod statistics;
pub mod util;
