use super::*;
use fxhash::FxHashMap;

pub type Degree = usize;

pub trait Degrees<N: NodeId> {
    /// Returns the number of incident edge occurrences of each referenced node. Parallel
    /// edges count individually and a loop `{u, u}` contributes 2 to the degree of `u`.
    fn node_degrees(&self) -> FxHashMap<N, Degree>;

    /// Returns the nodes of odd degree, in order of their first appearance in the edge list
    fn odd_degree_nodes(&self) -> Vec<N>;

    fn degree_of(&self, u: &N) -> Degree {
        self.node_degrees().get(u).copied().unwrap_or(0)
    }
}

impl<N: NodeId> Degrees<N> for [Edge<N>] {
    fn node_degrees(&self) -> FxHashMap<N, Degree> {
        let mut degrees = FxHashMap::default();
        for u in self.iter().flat_map(|e| e.endpoints()) {
            *degrees.entry(u.clone()).or_insert(0) += 1;
        }
        degrees
    }

    fn odd_degree_nodes(&self) -> Vec<N> {
        let degrees = self.node_degrees();
        self.referenced_nodes()
            .into_iter()
            .filter(|u| degrees[u] % 2 == 1)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn degrees_of_triangle() {
        let graph = edges_from([(1, 2), (2, 3), (3, 1)]);
        let degrees = graph.node_degrees();

        assert_eq!(degrees.len(), 3);
        assert!(degrees.values().all(|&d| d == 2));
        assert!(graph.odd_degree_nodes().is_empty());
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = edges_from([(1, 2), (2, 1), (2, 2), (2, 3)]);

        assert_eq!(graph.degree_of(&1), 2);
        assert_eq!(graph.degree_of(&2), 5);
        assert_eq!(graph.degree_of(&3), 1);
        assert_eq!(graph.degree_of(&4), 0);
        assert_eq!(graph.odd_degree_nodes(), vec![2, 3]);
    }

    #[test]
    fn empty_graph() {
        let graph: Vec<Edge<u32>> = Vec::new();
        assert!(graph.node_degrees().is_empty());
        assert!(graph.odd_degree_nodes().is_empty());
    }

    #[test]
    fn odd_nodes_in_order_of_appearance() {
        let graph = edges_from([("d", "c"), ("c", "b"), ("b", "a")]);
        assert_eq!(graph.odd_degree_nodes(), vec!["d", "a"]);
    }
}
