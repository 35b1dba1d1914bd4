use std::{fmt::Display, io::Write};

use crate::{graph::NodeId, tour::EulerianTour};

/// produces a minimalistic DOT representation of the graph traversed by a tour, where each edge
/// is labelled with its position in the tour
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
}

impl<N: NodeId + Display> DotWriter for EulerianTour<N> {
    fn try_write_dot<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        write!(writer, "graph G {{ ")?;
        for (i, step) in self.steps().enumerate() {
            write!(writer, "\"{}\"--\"{}\"[label={}]; ", step.0, step.1, i + 1)?;
        }
        write!(writer, r"}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{graph::edges_from, tour::Algorithm};

    #[test]
    fn labelled_steps() {
        let graph = edges_from([(1, 2), (2, 3)]);
        let tour = Algorithm::Fleury.find_tour(&graph).unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        tour.try_write_dot(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            r#"graph G { "1"--"2"[label=1]; "2"--"3"[label=2]; }"#
        );
    }
}
