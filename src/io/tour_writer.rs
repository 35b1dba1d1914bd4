use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{graph::NodeId, tour::*};

pub trait TourWriter {
    /// Writes the nodes of the tour in a single line, separated by spaces
    fn try_write_tour<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_tour_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl<N: NodeId + Display> TourWriter for EulerianTour<N> {
    fn try_write_tour<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for (i, u) in self.nodes().iter().enumerate() {
            if i > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{u}")?;
        }
        writeln!(writer)
    }

    fn try_write_tour_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_tour(writer)
    }
}

/// Machine readable summary of a computed tour
#[derive(Debug, Serialize)]
pub struct TourReport<'a, N> {
    pub algorithm: Algorithm,
    pub kind: TourKind,
    pub number_of_edges: usize,
    pub start: &'a N,
    pub end: &'a N,
    pub tour: &'a [N],
}

impl<'a, N: NodeId + Serialize> TourReport<'a, N> {
    pub fn new(algorithm: Algorithm, tour: &'a EulerianTour<N>) -> Self {
        Self {
            algorithm,
            kind: tour.kind(),
            number_of_edges: tour.number_of_edges(),
            start: tour.start(),
            end: tour.end(),
            tour: tour.nodes(),
        }
    }

    pub fn try_write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer(writer, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::edges_from;

    fn to_string(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        f(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn plain_tour() {
        let graph = edges_from([(1, 2), (2, 3), (3, 1)]);
        let tour = Algorithm::Fleury.find_tour(&graph).unwrap();

        let output = to_string(|buf| tour.try_write_tour(buf).unwrap());
        assert_eq!(output, "1 2 3 1\n");
    }

    #[test]
    fn json_report() {
        let graph = edges_from([("a", "b"), ("b", "c")]);
        let tour = Algorithm::Hierholzer.find_tour(&graph).unwrap();
        let report = TourReport::new(Algorithm::Hierholzer, &tour);

        let output = to_string(|buf| report.try_write_json(buf).unwrap());
        assert_eq!(
            output,
            r#"{"algorithm":"hierholzer","kind":"path","number_of_edges":2,"start":"a","end":"c","tour":["a","b","c"]}"#
        );
    }

    #[test]
    fn write_file() {
        let graph = edges_from([(4, 4)]);
        let tour = Algorithm::Fleury.find_tour(&graph).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.txt");
        tour.try_write_tour_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "4 4\n");
    }
}
