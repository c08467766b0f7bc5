use std::collections::BinaryHeap;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::error::NetworkError;
use crate::graph::{NodeIndex, RoadNetwork};
use crate::search::distance_vector::DistanceVector;
use crate::statistics::SearchStats;

#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

// Ordering is reversed so the std max-heap pops the cheapest candidate
// first. Candidates of equal weight compare equal; their extraction order
// is unspecified.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.weight.cmp(&self.weight)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

/// Single-source Dijkstra over a [`RoadNetwork`].
///
/// The frontier is a plain binary heap without decrease-key: relaxing an
/// intersection pushes a fresh candidate, and the superseded entry is
/// skipped when it surfaces after its node was settled.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a RoadNetwork,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a RoadNetwork) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the minimum travel cost from `source` to every
    /// intersection of the network.
    ///
    /// Fails if `source` is out of bounds. Intersections the source
    /// cannot reach stay `None` in the returned vector.
    pub fn shortest_paths(&mut self, source: NodeIndex) -> Result<DistanceVector, NetworkError> {
        self.g.check_bounds(source)?;
        let n = self.g.num_intersections();

        self.stats.init();

        let mut node_data: FxHashMap<NodeIndex, Weight> = FxHashMap::default();
        node_data.insert(source, 0);

        let mut settled = vec![false; n];

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            if settled[node_idx.index()] {
                // Stale entry, the node was settled through a cheaper one
                continue;
            }
            settled[node_idx.index()] = true;
            self.stats.nodes_settled += 1;

            for road in self.g.neighbors(node_idx) {
                self.stats.edges_relaxed += 1;

                let new_distance = weight.saturating_add(road.weight);
                if !settled[road.target.index()]
                    && new_distance < *node_data.get(&road.target).unwrap_or(&Weight::MAX)
                {
                    node_data.insert(road.target, new_distance);
                    queue.push(Candidate::new(road.target, new_distance));
                }
            }
        }
        self.stats.finish();

        debug!("distances from {}: {:?}", source, node_data);
        info!("search from {} finished: {}", source, self.stats);

        let distances = (0..n)
            .map(|i| node_data.get(&NodeIndex::new(i)).copied())
            .collect();

        Ok(DistanceVector::new(source, distances))
    }
}
