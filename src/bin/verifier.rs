#![deny(warnings)]

use log::{info, LevelFilter};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use structopt::StructOpt;

use walkcut::error::Error;
use walkcut::graph::io::{try_read_cut_set, InListRead};
use walkcut::graph::{AdjArrayIn, GraphEdgeEditing, GraphOrder, Node, Traversal};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "walkcut-verify",
    about = "Checks that deleting the listed vertices from the input graph leaves it acyclic."
)]
struct Opt {
    /// Input graph file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Vertex-set file to verify
    #[structopt(parse(from_os_str))]
    output: PathBuf,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() {
    let opt = Opt::from_args();
    walkcut::log::build_logger_for_verbosity(LevelFilter::Info, opt.verbose);

    match run(&opt) {
        Ok(true) => println!("No cycle detected"),
        Ok(false) => {
            eprintln!("Cycle(s) detected");
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}

fn run(opt: &Opt) -> walkcut::Result<bool> {
    let mut graph = {
        let file = File::open(&opt.input)?;
        AdjArrayIn::try_read_inlist(BufReader::new(file))?
    };

    let numbers = {
        let file = File::open(&opt.output)?;
        try_read_cut_set(BufReader::new(file))?
    };

    info!(
        "Deleting {} of {} vertices",
        numbers.len(),
        graph.number_of_nodes()
    );

    for number in numbers {
        if number < 1 || number > graph.len() {
            return Err(Error::InputFormat(format!(
                "vertex {} is out of range [1, {}]",
                number,
                graph.len()
            )));
        }

        graph.remove_edges_at_node((number - 1) as Node);
    }

    Ok(graph.is_acyclic())
}
