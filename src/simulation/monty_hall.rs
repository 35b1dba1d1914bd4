//! Monte Carlo estimate of the winning probability in the Monty Hall game show.
//!
//! A prize hides behind one of three doors. The player guesses a door, the host opens another
//! door without the prize, and the player may switch to the last closed door. Switching wins
//! with probability 2/3.

use std::str::FromStr;

use log::debug;
use rand::Rng;
use serde::Serialize;
use smallvec::SmallVec;

pub type Door = u8;
pub const NUM_DOORS: Door = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Switch,
    Stay,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "switch" => Ok(Strategy::Switch),
            "stay" => Ok(Strategy::Stay),
            _ => Err(format!("unknown strategy {s:?}; expected switch or stay")),
        }
    }
}

/// Plays a single round and returns true iff the player ends up with the prize
pub fn play_round(rng: &mut impl Rng, strategy: Strategy) -> bool {
    let prize = rng.gen_range(0..NUM_DOORS);
    let guess = rng.gen_range(0..NUM_DOORS);

    // if the guess is right, the host picks one of two goat doors at random
    let closed_goats: SmallVec<[Door; 2]> = (0..NUM_DOORS)
        .filter(|&d| d != prize && d != guess)
        .collect();
    let shown = closed_goats[rng.gen_range(0..closed_goats.len())];

    let choice = match strategy {
        Strategy::Stay => guess,
        Strategy::Switch => (0..NUM_DOORS)
            .find(|&d| d != guess && d != shown)
            .unwrap_or(guess),
    };

    choice == prize
}

/// Returns the fraction of `trials` rounds won with `strategy`, or 0.0 if there are no trials.
///
/// # Example
/// ```
/// use eulerian::simulation::*;
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64;
///
/// let mut rng = Pcg64::seed_from_u64(7);
/// let p = simulate_with_rng(&mut rng, 10_000, Strategy::Switch);
/// assert!((p - 2.0 / 3.0).abs() < 0.05);
/// ```
pub fn simulate_with_rng(rng: &mut impl Rng, trials: u64, strategy: Strategy) -> f64 {
    if trials == 0 {
        return 0.0;
    }

    let wins = (0..trials).filter(|_| play_round(&mut *rng, strategy)).count();
    debug!("{strategy:?}: won {wins} of {trials} rounds");

    wins as f64 / trials as f64
}

/// Win frequency when always switching doors, using the thread-local RNG
pub fn simulate(trials: u64) -> f64 {
    simulate_with_rng(&mut rand::thread_rng(), trials, Strategy::Switch)
}
