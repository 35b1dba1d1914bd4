use super::*;

pub trait Bridges {
    /// Returns true if removing the edge occurrence at `index` disconnects the remaining
    /// edges. Only this occurrence is removed; parallel copies of it stay in place.
    /// ** Panics if `index` is out of bounds **
    fn would_disconnect(&self, index: usize) -> bool;

    /// Returns the positions of all edge occurrences that are bridges
    fn compute_bridges(&self) -> Vec<usize>;
}

impl<N: NodeId> Bridges for [Edge<N>] {
    fn would_disconnect(&self, index: usize) -> bool {
        assert!(index < self.len());
        !edges_are_connected(
            self.iter()
                .enumerate()
                .filter(move |&(i, _)| i != index)
                .map(|(_, e)| e),
        )
    }

    fn compute_bridges(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.would_disconnect(i)).collect()
    }
}
