//! Re-exports of the most commonly used items in `traffic_core`.
pub use crate::constants::Weight;
pub use crate::error::NetworkError;
pub use crate::graph::node_index;
pub use crate::graph::{NodeIndex, Road, RoadNetwork};
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::distance_vector::DistanceVector;
pub use crate::simulation::{
    optimize_traffic_lights, sample_network, simulate_traffic, RandomWeights, WeightSource,
};
