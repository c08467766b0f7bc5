use std::fmt;

use log::debug;

use crate::constants::Weight;
use crate::error::NetworkError;

/// Intersection identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// One directed half of an undirected road, stored in the adjacency list
/// of the intersection it leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Road {
    pub fn new(target: NodeIndex, weight: Weight) -> Self {
        Road { target, weight }
    }
}

/// Undirected weighted road network over a fixed set of intersections.
///
/// Every road is stored as two adjacency entries, one per endpoint, so it
/// is traversable in both directions at the same cost. Parallel roads
/// between the same pair of intersections are kept as-is; they only add
/// redundant relaxation work during a search.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    adj: Vec<Vec<Road>>,
}

impl RoadNetwork {
    /// Creates an empty network of `n` intersections.
    pub fn with_intersections(n: usize) -> Self {
        RoadNetwork {
            adj: vec![Vec::new(); n],
        }
    }

    pub fn num_intersections(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected roads.
    pub fn num_roads(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub(crate) fn check_bounds(&self, node: NodeIndex) -> Result<(), NetworkError> {
        if node.index() < self.adj.len() {
            Ok(())
        } else {
            Err(NetworkError::IntersectionOutOfBounds {
                index: node.index(),
                num_intersections: self.adj.len(),
            })
        }
    }

    /// Connects `a` and `b` with a road of the given weight.
    ///
    /// Fails if either endpoint is out of bounds; nothing is inserted in
    /// that case.
    pub fn add_road(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        weight: Weight,
    ) -> Result<(), NetworkError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;

        self.adj[a.index()].push(Road::new(b, weight));
        self.adj[b.index()].push(Road::new(a, weight));

        debug!("added road {} <=> {} with weight {}", a, b, weight);

        Ok(())
    }

    /// Returns an iterator over the roads leaving `node`.
    ///
    /// **Panics** if `node` is out of bounds. Indices crossing the public
    /// API are validated before reaching this.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = &Road> + '_ {
        self.adj[node.index()].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roads_are_undirected() {
        let mut g = RoadNetwork::with_intersections(3);
        g.add_road(node_index(0), node_index(1), 4).unwrap();

        let from_zero: Vec<_> = g.neighbors(node_index(0)).collect();
        let from_one: Vec<_> = g.neighbors(node_index(1)).collect();

        assert_eq!(from_zero, vec![&Road::new(node_index(1), 4)]);
        assert_eq!(from_one, vec![&Road::new(node_index(0), 4)]);
        assert_eq!(g.num_roads(), 1);
    }

    #[test]
    fn parallel_roads_are_kept() {
        let mut g = RoadNetwork::with_intersections(2);
        g.add_road(node_index(0), node_index(1), 2).unwrap();
        g.add_road(node_index(0), node_index(1), 1).unwrap();

        assert_eq!(g.neighbors(node_index(0)).count(), 2);
        assert_eq!(g.num_roads(), 2);
    }

    #[test]
    fn add_road_rejects_unknown_intersection() {
        let mut g = RoadNetwork::with_intersections(2);

        assert_eq!(
            g.add_road(node_index(2), node_index(0), 1),
            Err(NetworkError::IntersectionOutOfBounds {
                index: 2,
                num_intersections: 2,
            })
        );
        assert_eq!(
            g.add_road(node_index(0), node_index(7), 1),
            Err(NetworkError::IntersectionOutOfBounds {
                index: 7,
                num_intersections: 2,
            })
        );

        // A rejected road must not leave a dangling half-entry behind
        assert_eq!(g.neighbors(node_index(0)).count(), 0);
        assert_eq!(g.num_roads(), 0);
    }
}
