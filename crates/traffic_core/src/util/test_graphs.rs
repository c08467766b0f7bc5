//! Small fixture networks shared by the crate's tests.

use crate::constants::Weight;
use crate::graph::{node_index, RoadNetwork};

/// Weights of [`reference_network`], in the road order used by
/// [`sample_network`](crate::simulation::sample_network).
pub fn reference_weights() -> [Weight; 6] {
    [4, 3, 2, 5, 9, 6]
}

/// Five intersections, six roads with fixed weights:
///
/// 0-1(4), 1-2(3), 2-3(2), 3-4(5), 0-3(9), 1-4(6)
///
/// From intersection 0 the distances are 0, 4, 7, 9, 10 (0-1-2-3 ties
/// with the direct 0-3 road at 9; 0-1-4 wins at 10).
pub fn reference_network() -> RoadNetwork {
    let mut g = RoadNetwork::with_intersections(5);

    let [w01, w12, w23, w34, w03, w14] = reference_weights();
    g.add_road(node_index(0), node_index(1), w01).unwrap();
    g.add_road(node_index(1), node_index(2), w12).unwrap();
    g.add_road(node_index(2), node_index(3), w23).unwrap();
    g.add_road(node_index(3), node_index(4), w34).unwrap();
    g.add_road(node_index(0), node_index(3), w03).unwrap();
    g.add_road(node_index(1), node_index(4), w14).unwrap();

    g
}

/// Three intersections, no roads at all.
pub fn disconnected_network() -> RoadNetwork {
    RoadNetwork::with_intersections(3)
}
