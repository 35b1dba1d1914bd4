use fxhash::FxHashMap;

use crate::{
    errors::{InvariantCheck, TourViolation},
    graph::*,
};

/// Pairs a graph with a claimed Eulerian tour to verify the claim
///
/// # Example
/// ```
/// use eulerian::{errors::*, graph::edges_from, tour::TourCheck};
/// let graph = edges_from([(1, 2), (2, 3), (3, 1)]);
/// assert!(TourCheck::new(&graph, &[3, 1, 2, 3]).is_correct().is_ok());
/// assert_eq!(
///     TourCheck::new(&graph, &[1, 2, 1, 3]).is_correct(),
///     Err(TourViolation::UnknownStep { step: 1 })
/// );
/// ```
pub struct TourCheck<'a, N> {
    graph: &'a [Edge<N>],
    tour: &'a [N],
}

impl<'a, N: NodeId> TourCheck<'a, N> {
    pub fn new(graph: &'a [Edge<N>], tour: &'a [N]) -> Self {
        Self { graph, tour }
    }
}

impl<N: NodeId> InvariantCheck<TourViolation> for TourCheck<'_, N> {
    /// Every step of the tour needs to consume an edge occurrence of the graph (in either
    /// orientation), and all occurrences need to be consumed.
    fn is_correct(&self) -> Result<(), TourViolation> {
        let expected = self.graph.len() + 1;
        if self.tour.len() != expected {
            return Err(TourViolation::WrongLength {
                expected,
                actual: self.tour.len(),
            });
        }

        let mut unused: FxHashMap<Edge<&N>, usize> = FxHashMap::default();
        for Edge(u, v) in self.graph {
            *unused.entry(Edge(u, v)).or_insert(0) += 1;
        }

        for (step, w) in self.tour.windows(2).enumerate() {
            let forward = Edge(&w[0], &w[1]);
            let key = if unused.get(&forward).is_some_and(|&count| count > 0) {
                forward
            } else {
                Edge(&w[1], &w[0])
            };

            match unused.get_mut(&key) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return Err(TourViolation::UnknownStep { step }),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_reversed_orientation() {
        let graph = edges_from([(1, 2), (2, 3)]);
        assert_eq!(TourCheck::new(&graph, &[3, 2, 1]).is_correct(), Ok(()));
    }

    #[test]
    fn rejects_wrong_length() {
        let graph = edges_from([(1, 2), (2, 3)]);
        assert_eq!(
            TourCheck::new(&graph, &[1, 2]).is_correct(),
            Err(TourViolation::WrongLength {
                expected: 3,
                actual: 2
            })
        );
        assert!(TourCheck::new(&graph, &[]).is_correct().is_err());
    }

    #[test]
    fn rejects_reused_edge() {
        let graph = edges_from([(1, 2), (2, 3)]);
        assert_eq!(
            TourCheck::new(&graph, &[1, 2, 1]).is_correct(),
            Err(TourViolation::UnknownStep { step: 1 })
        );
    }

    #[test]
    fn parallel_edges_count_individually() {
        let graph = edges_from([(1, 2), (2, 1), (1, 2)]);
        assert!(TourCheck::new(&graph, &[1, 2, 1, 2]).is_correct().is_ok());
        assert!(TourCheck::new(&graph, &[2, 1, 2, 1]).is_correct().is_ok());
    }

    #[test]
    fn loops() {
        let graph = edges_from([(1, 1), (1, 2)]);
        assert!(TourCheck::new(&graph, &[1, 1, 2]).is_correct().is_ok());
        assert!(TourCheck::new(&graph, &[2, 1, 1]).is_correct().is_ok());
        assert!(TourCheck::new(&graph, &[1, 2, 2]).is_correct().is_err());
    }
}
