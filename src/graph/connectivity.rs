use super::*;
use fxhash::FxHashSet;

pub trait Connectivity {
    /// Returns true if all nodes referenced by an edge lie in a single connected component.
    /// Nodes not referenced by any edge are ignored; an empty edge set is connected.
    fn is_connected(&self) -> bool;
}

impl<N: NodeId> Connectivity for [Edge<N>] {
    fn is_connected(&self) -> bool {
        edges_are_connected(self.iter())
    }
}

/// Fixed-point variant of a graph search: starting from the endpoints of the first edge, we keep
/// scanning all edges and absorb any endpoint adjacent to the reached set until a full scan makes
/// no progress. Needs O(E^2) time in the worst case, which is fine for the small inputs we target.
pub fn edges_are_connected<'a, N, I>(edges: I) -> bool
where
    N: NodeId + 'a,
    I: Iterator<Item = &'a Edge<N>> + Clone,
{
    let Some(first) = edges.clone().next() else {
        return true;
    };

    let mut reached: FxHashSet<&N> = first.endpoints().into_iter().collect();

    loop {
        let mut nodes_added = false;
        for Edge(u, v) in edges.clone() {
            match (reached.contains(u), reached.contains(v)) {
                (true, false) => nodes_added |= reached.insert(v),
                (false, true) => nodes_added |= reached.insert(u),
                _ => {}
            }
        }

        if !nodes_added {
            break;
        }
    }

    edges.flat_map(|e| e.endpoints()).all(|u| reached.contains(u))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_is_connected() {
        let graph: Vec<Edge<u32>> = Vec::new();
        assert!(graph.is_connected());
    }

    #[test]
    fn path_and_cycle() {
        assert!(edges_from([(1, 2), (2, 3), (3, 4)]).is_connected());
        assert!(edges_from([(1, 2), (2, 3), (3, 1)]).is_connected());
    }

    #[test]
    fn edges_given_out_of_order() {
        // (3, 4) is only reachable after (2, 3) was absorbed in a later scan
        assert!(edges_from([(3, 4), (1, 2), (4, 5), (2, 3)]).is_connected());
        assert!(edges_from([(5, 6), (4, 5), (3, 4), (2, 3), (1, 2)]).is_connected());
    }

    #[test]
    fn two_components() {
        assert!(!edges_from([(1, 2), (2, 3), (4, 5)]).is_connected());
        assert!(!edges_from([(1, 2), (3, 3)]).is_connected());
    }

    #[test]
    fn loops_and_parallel_edges() {
        assert!(edges_from([(1, 1)]).is_connected());
        assert!(edges_from([(1, 2), (2, 1), (2, 2)]).is_connected());
    }

    #[test]
    fn subset_of_edges() {
        let graph = edges_from([(1, 2), (2, 3), (3, 4)]);
        assert!(!edges_are_connected(
            graph.iter().enumerate().filter(|&(i, _)| i != 1).map(|(_, e)| e)
        ));
        assert!(edges_are_connected(graph.iter().skip(1)));
    }
}
