pub mod errors;
pub mod graph;
pub mod io;
pub mod log;
pub mod simulation;
pub mod tour;

pub mod prelude {
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::io::*;
    pub use super::simulation::*;
    pub use super::tour::*;
}

#[cfg(test)]
mod testing;
