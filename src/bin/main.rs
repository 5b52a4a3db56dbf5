use algorithm_demos::dijkstra::ShortestPathSolver;
use algorithm_demos::graph::Graph;
use algorithm_demos::pso::{ParticleSwarm, PsoConfig};
use algorithm_demos::utils::measure_time;
use clap::Parser;

#[derive(Parser)]
struct Opts {

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Parser)]
enum SubCommand {
    ShortestPath(ShortestPathCommand),
    Pso(PsoCommand)
}

#[derive(Parser)]
struct ShortestPathCommand {

    /// vertex to start the search from
    #[clap(short, long, default_value="V1")]
    source: String
}

#[derive(Parser)]
struct PsoCommand {

    /// number of particles in the swarm
    #[clap(short, long, default_value="10")]
    population: usize,

    /// number of update iterations
    #[clap(short, long, default_value="3")]
    iterations: usize,

    /// fixed random seed, entropy seeded otherwise
    #[clap(short, long)]
    seed: Option<u64>
}

fn main() {
    let opts: Opts = Opts::parse();

    match opts.subcmd {
        SubCommand::ShortestPath(command) => shortest_path_example(&command),
        SubCommand::Pso(command) => pso_example(&command),
    }
}

/// builds the five vertex graph used by the instructional material
fn example_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertices(&["V1", "V2", "V3", "V4", "V5"]);

    let edges = [
        ("V1", "V2", 7), ("V1", "V3", 13),
        ("V2", "V3", 4), ("V2", "V4", 8),
        ("V3", "V2", 5), ("V3", "V4", 3), ("V3", "V5", 8),
        ("V4", "V2", 7), ("V4", "V3", 5), ("V4", "V5", 2),
    ];

    for (source, target, weight) in edges {
        if let Err(error) = graph.add_edge(source, target, weight) {
            panic!("broken example graph: {}", error);
        }
    }

    graph
}

fn shortest_path_example(command: &ShortestPathCommand) {
    let graph = example_graph();
    println!("graph successfully built. num_vertices: {}, num_edges: {}", graph.num_vertices(), graph.num_edges());
    graph.print();

    let solver = ShortestPathSolver::new(&graph);
    let (duration, result) = measure_time(|| solver.solve(&command.source));

    match result {
        Ok(tree) => {
            println!("shortest distances from {} computed in {:?}", command.source, duration);

            for vertex in graph.vertex_ids() {
                let label = graph.label(vertex);

                match tree.path(vertex) {
                    Some(path) => {
                        let hops: Vec<&str> = path.iter().map(|&id| graph.label(id)).collect();

                        println!("{}: distance {}, path: {}", label, tree.distance(vertex), hops.join(" -> "));
                    },
                    None => println!("{}: unreachable", label),
                }
            }
        },
        Err(error) => println!("unable to solve: {}", error),
    }
}

fn pso_example(command: &PsoCommand) {
    let config = PsoConfig {
        population: command.population,
        iterations: command.iterations,
        ..PsoConfig::default()
    };

    let mut swarm = ParticleSwarm::new(config);
    if let Some(seed) = command.seed {
        swarm = swarm.with_seed(seed);
    }

    // the one dimensional objective from the instructional material
    let objective = |x: &[f64]| (7.0 * x[0] - 3.0).powi(2) + (0.5 * x[0] * x[0]).exp();

    let (duration, result) = measure_time(|| swarm.optimize(objective, 1));

    println!("swarm of {} particles finished {} iterations in {:?}", command.population, command.iterations, duration);
    println!("best position: {:?}", result.best_position);
    println!("best fitness: {}", result.best_fitness);

    // INFINITY marks a run without a single evaluation (empty swarm)
    if result.best_fitness == f64::INFINITY {
        println!("no particles were evaluated, increase the population");
    }
}
