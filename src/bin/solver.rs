#![deny(warnings)]

use itertools::Itertools;
use log::{info, LevelFilter};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;
use structopt::StructOpt;

use walkcut::graph::io::{try_write_cut_set, InListRead};
use walkcut::graph::{AdjArrayIn, GraphOrder};
use walkcut::reducer::feedback_vertex_set;
use walkcut::simulation::SimulationParams;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "walkcut-solve",
    about = "Computes a heuristic directed feedback vertex set from random-walk traffic."
)]
struct Opt {
    /// Input graph file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Output vertex-set file
    #[structopt(parse(from_os_str))]
    output: PathBuf,

    /// Number of random walks per batch
    #[structopt(long, default_value = "1000")]
    agents: usize,

    /// Number of transitions per walk
    #[structopt(long, default_value = "1000")]
    steps: usize,

    /// Maximum number of batches per component
    #[structopt(long, default_value = "250")]
    batches: usize,

    /// Normalized traffic drift between batches below which a component's
    /// simulation terminates early
    #[structopt(long, default_value = "0.001")]
    change_threshold: f64,

    /// Seed of the random number generator
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() {
    let opt = Opt::from_args();
    walkcut::log::build_logger_for_verbosity(LevelFilter::Info, opt.verbose);

    if let Err(error) = run(&opt) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn run(opt: &Opt) -> walkcut::Result<()> {
    let start = Instant::now();

    let graph = {
        let file = File::open(&opt.input)?;
        AdjArrayIn::try_read_inlist(BufReader::new(file))?
    };

    info!(
        "Input graph with n={}, m={}",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    let params = SimulationParams {
        agents: opt.agents,
        steps: opt.steps,
        batches: opt.batches,
        change_threshold: opt.change_threshold,
    };

    let mut rng = Pcg64Mcg::seed_from_u64(opt.seed);
    let cut = feedback_vertex_set(&graph, &params, &mut rng)?;

    let numbers = cut.iter().map(|&v| v as usize + 1).collect_vec();
    let writer = BufWriter::new(File::create(&opt.output)?);
    try_write_cut_set(writer, &numbers)?;

    info!("Cut {} of {} vertices", numbers.len(), graph.number_of_nodes());
    info!("Elapsed time: {}s", start.elapsed().as_secs());

    Ok(())
}
