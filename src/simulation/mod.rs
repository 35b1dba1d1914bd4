pub mod monty_hall;

pub use monty_hall::*;
