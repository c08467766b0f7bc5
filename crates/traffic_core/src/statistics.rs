use std::{
    fmt::Display,
    time::{Duration, Instant},
};

/// Counters and timing for a single search run.
#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} intersections settled, {} roads relaxed in {:?}",
            self.nodes_settled, self.edges_relaxed, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{graph::node_index, search::dijkstra::Dijkstra, util::test_graphs::reference_network};

    #[test]
    fn stats_work() {
        let g = reference_network();

        let mut d = Dijkstra::new(&g);
        d.shortest_paths(node_index(0)).unwrap();

        assert!(d.stats.duration.is_some());
        assert_eq!(d.stats.nodes_settled, 5);
        // Every settled intersection scans its full adjacency list: each
        // of the 6 roads is seen once per endpoint
        assert_eq!(d.stats.edges_relaxed, 12);
    }

    #[test]
    fn stats_reset_between_runs() {
        let g = reference_network();

        let mut d = Dijkstra::new(&g);
        d.shortest_paths(node_index(0)).unwrap();
        let first_settled = d.stats.nodes_settled;

        d.shortest_paths(node_index(4)).unwrap();

        assert_eq!(d.stats.nodes_settled, first_settled);
    }
}
