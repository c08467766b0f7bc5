use thiserror::Error;

/// Errors surfaced by [`RoadNetwork`] mutation and search queries.
///
/// [`RoadNetwork`]: crate::graph::RoadNetwork
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// An intersection identifier outside `[0, n)` was passed to the API.
    #[error("intersection {index} is out of bounds for a network of {num_intersections} intersections")]
    IntersectionOutOfBounds {
        index: usize,
        num_intersections: usize,
    },
}
