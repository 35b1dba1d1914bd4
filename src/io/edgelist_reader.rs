use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    marker::PhantomData,
    path::Path,
    str::FromStr,
};

use crate::graph::Edge;

type Result<T> = std::io::Result<T>;

/// Reads graphs in a plain edge list format: each line holds the two endpoints of an edge
/// separated by whitespace. Blank lines, lines starting with `#`, and lines whose first token is
/// `c` are skipped.
pub trait GraphEdgeListReader: Sized {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<N: FromStr> GraphEdgeListReader for Vec<Edge<N>> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::new(reader).collect()
    }

    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_edge_list(buf_reader)
    }
}

pub struct EdgeListReader<R, N> {
    lines: Lines<R>,
    line_number: usize,
    _node: PhantomData<N>,
}

impl<R: BufRead, N: FromStr> EdgeListReader<R, N> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            _node: PhantomData,
        }
    }

    /// Number of lines consumed so far (including comments)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead, N: FromStr> Iterator for EdgeListReader<R, N> {
    type Item = Result<Edge<N>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr, $line : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of line {} when parsing {}.", $line, $name),
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid value {token:?} in line {}. Cannot parse {}.", $line, $name),
                ))
            }
        }
    }};
}

impl<R: BufRead, N: FromStr> EdgeListReader<R, N> {
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            self.line_number += 1;
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if is_comment(&line) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge<N>>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();
        let line_number = self.line_number;

        let from = parse_next_value!(parts, "source node", line_number);
        let dest = parse_next_value!(parts, "target node", line_number);

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Expected end of line {line_number} after two nodes")
        );

        Ok(Some(Edge(from, dest)))
    }
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.split_whitespace().next() == Some("c")
}
