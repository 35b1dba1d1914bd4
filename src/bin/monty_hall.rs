use eulerian::{log::build_logger_for_verbosity, simulation::*};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::Serialize;
use structopt::StructOpt;

/// Estimates the winning probability in the Monty Hall game by simulation
#[derive(Debug, StructOpt)]
struct Opts {
    #[structopt(short = "n", long, default_value = "1000")]
    trials: u64,

    /// Seed for a reproducible run; uses the thread-local RNG otherwise
    #[structopt(short = "s", long)]
    seed: Option<u64>,

    /// Keep the initial guess instead of switching doors
    #[structopt(long)]
    stay: bool,

    #[structopt(long)]
    json: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Serialize)]
struct Export {
    strategy: Strategy,
    trials: u64,
    seed: Option<u64>,
    win_rate: f64,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let strategy = if opts.stay {
        Strategy::Stay
    } else {
        Strategy::Switch
    };

    let win_rate = match opts.seed {
        Some(seed) => simulate_with_rng(&mut Pcg64::seed_from_u64(seed), opts.trials, strategy),
        None => simulate_with_rng(&mut rand::thread_rng(), opts.trials, strategy),
    };
    info!("{strategy:?} won {win_rate:.4} of {} rounds", opts.trials);

    if opts.json {
        let data = Export {
            strategy,
            trials: opts.trials,
            seed: opts.seed,
            win_rate,
        };
        serde_json::to_writer(std::io::stdout().lock(), &data)?;
        println!();
    } else {
        println!("{win_rate}");
    }

    Ok(())
}
