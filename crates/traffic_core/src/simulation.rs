//! Presentation glue around the search core: road weight generation and
//! the line-oriented reports of the traffic simulator.

use std::io::Write;
use std::ops::RangeInclusive;

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::constants::Weight;
use crate::error::NetworkError;
use crate::graph::{node_index, NodeIndex, RoadNetwork};
use crate::search::dijkstra::Dijkstra;

/// Range the sample weight generator draws from.
pub const WEIGHT_RANGE: RangeInclusive<Weight> = 1..=10;

/// Source of road weights.
///
/// Network generation is parameterized over this so the simulator can
/// draw random travel times while tests stay deterministic.
pub trait WeightSource {
    fn next_weight(&mut self) -> Weight;
}

/// Uniform random weights out of [`WEIGHT_RANGE`].
pub struct RandomWeights {
    rng: StdRng,
}

impl RandomWeights {
    /// Reproducible source for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        RandomWeights {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// OS-entropy seeded source.
    pub fn from_entropy() -> Self {
        RandomWeights {
            rng: StdRng::from_entropy(),
        }
    }
}

impl WeightSource for RandomWeights {
    fn next_weight(&mut self) -> Weight {
        self.rng.gen_range(WEIGHT_RANGE)
    }
}

/// Builds the sample network: 5 intersections and 6 roads, with weights
/// drawn from `weights` in road order.
pub fn sample_network(weights: &mut impl WeightSource) -> Result<RoadNetwork, NetworkError> {
    let mut network = RoadNetwork::with_intersections(5);

    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 3), (1, 4)] {
        network.add_road(node_index(a), node_index(b), weights.next_weight())?;
    }

    info!(
        "built sample network with {} intersections and {} roads",
        network.num_intersections(),
        network.num_roads()
    );

    Ok(network)
}

/// Runs one timed query from `source` and writes the simulation report:
/// a line per intersection followed by the elapsed wall-clock time.
pub fn simulate_traffic(
    out: &mut impl Write,
    network: &RoadNetwork,
    source: NodeIndex,
) -> anyhow::Result<()> {
    let mut dijkstra = Dijkstra::new(network);
    let paths = dijkstra.shortest_paths(source)?;

    writeln!(out, "Simulating traffic from intersection {}:", source)?;
    for (node, distance) in paths.iter() {
        match distance {
            Some(d) => writeln!(out, "Shortest path to intersection {}: {} units.", node, d)?,
            None => writeln!(out, "No path to intersection {}.", node)?,
        }
    }

    let elapsed = dijkstra.stats.duration.unwrap_or_default();
    writeln!(
        out,
        "Simulation completed in {} microseconds.",
        elapsed.as_micros()
    )?;

    Ok(())
}

/// Writes the "traffic light optimization" report: the full distance
/// vector from every intersection in turn, one block per source.
pub fn optimize_traffic_lights(
    out: &mut impl Write,
    network: &RoadNetwork,
) -> anyhow::Result<()> {
    let mut dijkstra = Dijkstra::new(network);

    for i in 0..network.num_intersections() {
        let source = node_index(i);
        let paths = dijkstra.shortest_paths(source)?;

        writeln!(out, "Traffic light optimization for intersection {}:", source)?;
        writeln!(out, "Shortest paths to other intersections:")?;
        for (node, distance) in paths.iter() {
            match distance {
                Some(d) => writeln!(out, "Intersection {}: {} units of time", node, d)?,
                None => writeln!(out, "No path from {} to {}", source, node)?,
            }
        }
        writeln!(out, "------------------------------")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_graphs::reference_weights;

    struct FixedWeights(std::vec::IntoIter<Weight>);

    impl FixedWeights {
        fn new(weights: Vec<Weight>) -> Self {
            FixedWeights(weights.into_iter())
        }
    }

    impl WeightSource for FixedWeights {
        fn next_weight(&mut self) -> Weight {
            self.0.next().expect("fixture ran out of weights")
        }
    }

    #[test]
    fn random_weights_are_seeded_and_in_range() {
        let mut a = RandomWeights::from_seed(42);
        let mut b = RandomWeights::from_seed(42);

        for _ in 0..100 {
            let w = a.next_weight();
            assert_eq!(w, b.next_weight());
            assert!(WEIGHT_RANGE.contains(&w));
        }
    }

    #[test]
    fn sample_network_topology() {
        let mut weights = FixedWeights::new(reference_weights().to_vec());
        let network = sample_network(&mut weights).unwrap();

        assert_eq!(network.num_intersections(), 5);
        assert_eq!(network.num_roads(), 6);

        // Weights are assigned in road order: 0-1 gets the first draw
        let road = network.neighbors(node_index(0)).next().unwrap();
        assert_eq!(road.target, node_index(1));
        assert_eq!(road.weight, 4);
    }

    #[test]
    fn simulation_report() {
        let mut weights = FixedWeights::new(reference_weights().to_vec());
        let network = sample_network(&mut weights).unwrap();

        let mut out = Vec::new();
        simulate_traffic(&mut out, &network, node_index(0)).unwrap();
        let report = String::from_utf8(out).unwrap();

        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("Simulating traffic from intersection 0:"));
        assert_eq!(
            lines.next(),
            Some("Shortest path to intersection 0: 0 units.")
        );
        assert_eq!(
            lines.next(),
            Some("Shortest path to intersection 1: 4 units.")
        );
        assert!(report.contains("Shortest path to intersection 4: 10 units."));

        let last = report.lines().last().unwrap();
        assert!(last.starts_with("Simulation completed in "));
        assert!(last.ends_with(" microseconds."));
    }

    #[test]
    fn simulation_report_disconnected() {
        let network = RoadNetwork::with_intersections(2);

        let mut out = Vec::new();
        simulate_traffic(&mut out, &network, node_index(0)).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("Shortest path to intersection 0: 0 units."));
        assert!(report.contains("No path to intersection 1."));
    }

    #[test]
    fn optimization_report() {
        let mut weights = FixedWeights::new(reference_weights().to_vec());
        let network = sample_network(&mut weights).unwrap();

        let mut out = Vec::new();
        optimize_traffic_lights(&mut out, &network).unwrap();
        let report = String::from_utf8(out).unwrap();

        for i in 0..5 {
            assert!(report.contains(&format!(
                "Traffic light optimization for intersection {}:",
                i
            )));
        }
        // One separator per source block
        assert_eq!(
            report
                .lines()
                .filter(|l| *l == "------------------------------")
                .count(),
            5
        );
        assert!(report.contains("Intersection 4: 10 units of time"));
    }

    #[test]
    fn optimization_report_unreachable_wording() {
        let network = RoadNetwork::with_intersections(2);

        let mut out = Vec::new();
        optimize_traffic_lights(&mut out, &network).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("No path from 0 to 1"));
        assert!(report.contains("No path from 1 to 0"));
        assert!(report.contains("Intersection 0: 0 units of time"));
    }
}
