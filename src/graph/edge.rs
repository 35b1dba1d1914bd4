use super::*;

pub trait EdgeOps<N> {
    fn is_loop(&self) -> bool;
    fn reverse(&self) -> Self;
    fn is_incident_to(&self, u: &N) -> bool;
    /// Returns the endpoint opposite to `u`; for a loop this is `u` itself.
    /// ** Panics if `u` is not an endpoint **
    fn other_endpoint(&self, u: &N) -> &N;
}

/// An undirected edge; `Edge(u, v)` and `Edge(v, u)` denote the same pair of endpoints.
/// Derived equality is orientation-sensitive, use [`Edge::same_endpoints`] to compare as unordered pairs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge<N>(pub N, pub N);

impl<N> Edge<N> {
    pub fn endpoints(&self) -> [&N; 2] {
        [&self.0, &self.1]
    }
}

impl<N: PartialEq> Edge<N> {
    /// Returns true if both edges connect the same two nodes, irrespective of orientation
    ///
    /// # Example
    /// ```
    /// use eulerian::graph::Edge;
    /// assert!(Edge(1, 2).same_endpoints(&Edge(2, 1)));
    /// assert!(!Edge(1, 2).same_endpoints(&Edge(1, 3)));
    /// ```
    pub fn same_endpoints(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<N: Ord + Clone> Edge<N> {
    pub fn normalized(&self) -> Self {
        if self.0 <= self.1 {
            self.clone()
        } else {
            Edge(self.1.clone(), self.0.clone())
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

impl<N: NodeId> EdgeOps<N> for Edge<N> {
    fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }

    fn is_incident_to(&self, u: &N) -> bool {
        self.0 == *u || self.1 == *u
    }

    fn other_endpoint(&self, u: &N) -> &N {
        if self.0 == *u {
            &self.1
        } else {
            assert_eq!(self.1, *u, "{u:?} is not an endpoint of {self:?}");
            &self.0
        }
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from(value: (N, N)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<N: Clone> From<&(N, N)> for Edge<N> {
    fn from(value: &(N, N)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<N: Clone> From<&Edge<N>> for Edge<N> {
    fn from(value: &Edge<N>) -> Self {
        value.clone()
    }
}

/// Converts any list of pairs into a list of edges
pub fn edges_from<N, E>(pairs: impl IntoIterator<Item = E>) -> Vec<Edge<N>>
where
    E: Into<Edge<N>>,
{
    pairs.into_iter().map(|e| e.into()).collect()
}
