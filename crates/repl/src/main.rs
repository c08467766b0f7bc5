//! Interactive shell over a generated traffic network.
use traffic_core::constants::NodeId;
use traffic_core::graph::{node_index, RoadNetwork};
use traffic_core::search::dijkstra::Dijkstra;
use traffic_core::simulation::{optimize_traffic_lights, sample_network, RandomWeights};

use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Network has {} intersections and {} roads",
        context.network.num_intersections(),
        context.network.num_roads()
    )))
}

fn run_paths(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<NodeId>("src").unwrap();

    let mut dijkstra = Dijkstra::new(&context.network);
    match dijkstra.shortest_paths(node_index(src)) {
        Ok(paths) => {
            let mut report = String::new();
            for (node, distance) in paths.iter() {
                match distance {
                    Some(d) => {
                        report.push_str(&format!("Intersection {}: {} units of time\n", node, d))
                    }
                    None => report.push_str(&format!("No path from {} to {}\n", src, node)),
                }
            }
            report.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
            Ok(Some(report))
        }
        Err(e) => Ok(Some(e.to_string())),
    }
}

fn run_optimize(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = Vec::new();
    match optimize_traffic_lights(&mut out, &context.network) {
        Ok(()) => Ok(Some(String::from_utf8_lossy(&out).into_owned())),
        Err(e) => Ok(Some(e.to_string())),
    }
}

fn measure_paths(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let mut rng = rand::thread_rng();
    let mut res = String::new();
    // Run a full query from n random sources
    for _ in 0..n {
        let src = rng.gen_range(0..context.network.num_intersections());
        let mut dijkstra = Dijkstra::new(&context.network);
        if dijkstra.shortest_paths(node_index(src)).is_err() {
            continue;
        }
        res.push_str(&format!("from {}: {:?}\n", src, dijkstra.stats.duration));
    }

    Ok(Some(res))
}

struct Context {
    network: RoadNetwork,
}

impl Context {
    fn new(network: RoadNetwork) -> Self {
        Self { network }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Optional seed as first argument for reproducible road weights
    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    let mut weights = match seed {
        Some(seed) => RandomWeights::from_seed(seed),
        None => RandomWeights::from_entropy(),
    };
    let network = sample_network(&mut weights).expect("sample network indices are in range");

    let context = Context::new(network);

    let mut repl = Repl::new(context)
        .with_name("Traffic")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query the traffic network")
        .with_banner("Welcome to the traffic network shell")
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(
            Command::new("paths")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of the source intersection"),
                )
                .about("Shortest paths from one intersection using Dijkstra's algorithm"),
            run_paths,
        )
        .with_command(
            Command::new("optimize")
                .about("Print shortest paths from every intersection in turn"),
            run_optimize,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random sources to query"),
                )
                .about("Measure query time from `n` random sources"),
            measure_paths,
        );

    repl.run()
}
