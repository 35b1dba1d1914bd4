use std::{
    fmt::Display,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use eulerian::{log::build_logger_for_verbosity, prelude::*};
use log::{LevelFilter, info};
use serde::Serialize;
use structopt::StructOpt;

/// Computes an Eulerian tour of an undirected multigraph given as edge list
#[derive(Debug, StructOpt)]
struct Opts {
    /// Edge list with one edge per line; reads stdin if omitted
    #[structopt(short = "i", long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Either fleury or hierholzer
    #[structopt(short = "a", long, default_value = "fleury")]
    algorithm: Algorithm,

    /// Print a JSON report instead of the plain node sequence
    #[structopt(long)]
    json: bool,

    /// Print the traversed graph in DOT format with edges labelled by tour position
    #[structopt(long, conflicts_with = "json")]
    dot: bool,

    /// Ignore the input and run on a few built-in graphs
    #[structopt(long)]
    demo: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

const DEMO_GRAPHS: [&[(u32, u32)]; 5] = [
    &[(1, 2), (2, 3), (3, 1)],
    &[(1, 2), (2, 3), (3, 6), (6, 5), (2, 5), (4, 5), (1, 4)],
    &[
        (0, 1),
        (1, 5),
        (1, 7),
        (4, 5),
        (4, 8),
        (1, 6),
        (3, 7),
        (5, 9),
        (2, 4),
        (0, 4),
        (2, 5),
        (3, 6),
        (8, 9),
    ],
    &[
        (8, 16),
        (8, 18),
        (16, 17),
        (18, 19),
        (3, 17),
        (13, 17),
        (5, 13),
        (3, 4),
        (0, 18),
        (3, 14),
        (11, 14),
        (1, 8),
        (1, 9),
        (4, 12),
        (2, 19),
        (1, 10),
        (7, 9),
        (13, 15),
        (6, 12),
        (0, 1),
        (2, 11),
        (3, 18),
        (5, 6),
        (7, 15),
        (8, 13),
        (10, 17),
    ],
    &[(1, 2), (2, 3), (4, 5)],
];

fn load_graph(path: &Option<PathBuf>) -> anyhow::Result<Vec<Edge<String>>> {
    if let Some(path) = path {
        Vec::try_read_edge_list_file(path)
            .with_context(|| format!("Cannot read edge list {}", path.display()))
    } else {
        let stdin = std::io::stdin().lock();
        Ok(Vec::try_read_edge_list(stdin)?)
    }
}

fn write_tour<N, W>(opts: &Opts, tour: &EulerianTour<N>, mut writer: W) -> anyhow::Result<()>
where
    N: NodeId + Display + Serialize,
    W: Write,
{
    if opts.json {
        TourReport::new(opts.algorithm, tour).try_write_json(&mut writer)?;
        writeln!(writer)?;
    } else if opts.dot {
        tour.try_write_dot(&mut writer)?;
        writeln!(writer)?;
    } else {
        tour.try_write_tour(&mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn run_demo(opts: &Opts) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(std::io::stdout().lock());
    for pairs in DEMO_GRAPHS {
        let graph: Vec<Edge<u32>> = edges_from(pairs);
        match opts.algorithm.find_tour(&graph) {
            Ok(tour) => write_tour(opts, &tour, &mut writer)?,
            Err(e) => writeln!(writer, "no tour: {e}")?,
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    if opts.demo {
        return run_demo(&opts);
    }

    let graph = load_graph(&opts.input)?;
    info!("Read graph with {} edges", graph.len());

    let tour = opts
        .algorithm
        .find_tour(&graph)
        .context("Graph has no Eulerian tour")?;
    info!("Found {:?} with {} edges", tour.kind(), tour.number_of_edges());

    write_tour(&opts, &tour, std::io::stdout().lock())
}
