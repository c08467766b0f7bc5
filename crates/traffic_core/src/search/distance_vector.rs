use crate::constants::Weight;
use crate::graph::NodeIndex;

/// Result of a single-source search: the minimum travel cost from the
/// source to every intersection of the network, `None` for intersections
/// the source cannot reach.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DistanceVector {
    pub source: NodeIndex,
    pub distances: Vec<Option<Weight>>,
}

impl DistanceVector {
    pub fn new(source: NodeIndex, distances: Vec<Option<Weight>>) -> Self {
        DistanceVector { source, distances }
    }

    /// Cost to reach `node`, `None` if unreachable or out of range.
    pub fn distance(&self, node: NodeIndex) -> Option<Weight> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Iterates over `(intersection, cost)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, Option<Weight>)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, d)| (NodeIndex::new(i), *d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
