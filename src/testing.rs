use super::{graph::*, tour::TourKind};
use rand::{Rng, seq::SliceRandom};

/// Samples a connected multigraph that has an Eulerian tour by recording a random walk. Closed
/// walks yield circuits, open walks yield paths between the two ends. Walk steps may repeat
/// edges or stay at a node, so parallel edges and loops occur. The edge list is shuffled and
/// edges are randomly reoriented to hide the walk.
pub fn random_eulerian_graph(rng: &mut impl Rng) -> (Vec<Edge<u32>>, TourKind) {
    let n = rng.gen_range(1..12);
    let steps = rng.gen_range(1..30);

    let start = rng.gen_range(0..n);
    let mut current = start;
    let mut edges = Vec::with_capacity(steps + 1);
    for _ in 0..steps {
        let next = rng.gen_range(0..n);
        edges.push(Edge(current, next));
        current = next;
    }

    if rng.gen_bool(0.5) && current != start {
        edges.push(Edge(current, start));
        current = start;
    }

    for edge in edges.iter_mut() {
        if rng.gen_bool(0.5) {
            *edge = edge.reverse();
        }
    }
    edges.shuffle(rng);

    let kind = if current == start {
        TourKind::Circuit
    } else {
        TourKind::Path
    };

    (edges, kind)
}

pub fn generate_random_eulerian_graphs<R: Rng>(
    rng: &mut R,
) -> impl Iterator<Item = (Vec<Edge<u32>>, TourKind)> + '_ {
    std::iter::repeat_with(move || random_eulerian_graph(&mut *rng))
}

#[test]
fn random_graphs_are_eulerian() {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    let mut rng = Pcg64::seed_from_u64(1);
    for (graph, kind) in generate_random_eulerian_graphs(&mut rng).take(100) {
        assert!(graph.is_connected());
        let expected_odd = match kind {
            TourKind::Circuit => 0,
            TourKind::Path => 2,
        };
        assert_eq!(graph.odd_degree_nodes().len(), expected_odd);
    }
}
