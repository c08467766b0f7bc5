//! Single-source shortest-path search over a road network.
pub mod dijkstra;
pub mod distance_vector;
