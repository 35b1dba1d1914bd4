pub mod edgelist_reader;
pub use edgelist_reader::*;
pub mod tour_writer;
pub use tour_writer::*;

pub mod dot_writer;
pub use dot_writer::DotWriter;
