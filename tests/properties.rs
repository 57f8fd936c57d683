use proptest::prelude::*;
use toposort::{Graph, topological_sort};

/// A random DAG: every edge goes from a lower to a higher rank, and ranks
/// are a random permutation of the vertices.
fn dag() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<usize>)> {
    (1usize..24)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n), 0..n * 3),
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            )
        })
        .prop_map(|(n, raw, rank_to_vertex)| {
            let edges: Vec<(usize, usize)> = raw
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| {
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    (rank_to_vertex[lo], rank_to_vertex[hi])
                })
                .collect();
            (n, edges, rank_to_vertex)
        })
}

proptest! {
    #[test]
    fn acyclic_graphs_sort_every_vertex_once((n, edges, _) in dag()) {
        let graph = Graph::from_edges(n, &edges).unwrap();
        let order = topological_sort(&graph).unwrap();

        let mut seen = order.as_slice().to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn acyclic_graphs_respect_every_edge((n, edges, _) in dag()) {
        let graph = Graph::from_edges(n, &edges).unwrap();
        let order = topological_sort(&graph).unwrap();

        for &(src, dest) in &edges {
            prop_assert!(order.position(src) < order.position(dest));
        }
        prop_assert!(order.violations(&graph).is_empty());
    }

    #[test]
    fn timestamps_are_distinct_and_ordered((n, edges, _) in dag()) {
        let graph = Graph::from_edges(n, &edges).unwrap();
        let order = topological_sort(&graph).unwrap();

        let mut stamps = Vec::with_capacity(2 * n);
        for times in order.all_times() {
            prop_assert!(times.discovered < times.finished);
            stamps.push(times.discovered);
            stamps.push(times.finished);
        }
        stamps.sort_unstable();
        prop_assert_eq!(stamps, (0..2 * n).collect::<Vec<_>>());
    }

    #[test]
    fn sorting_is_deterministic((n, edges, _) in dag()) {
        let graph = Graph::from_edges(n, &edges).unwrap();
        prop_assert_eq!(topological_sort(&graph), topological_sort(&graph));
    }

    #[test]
    fn closing_a_cycle_is_detected(
        (n, edges, rank_to_vertex) in dag(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let mut graph = Graph::from_edges(n, &edges).unwrap();
        let lo = rank_to_vertex[a.index(n)];
        let hi = rank_to_vertex[b.index(n)];
        graph.add_edge(lo, hi).unwrap();
        graph.add_edge(hi, lo).unwrap();

        let cycle = topological_sort(&graph).unwrap_err();
        let path = cycle.path();
        prop_assert!(path.len() >= 2);
        prop_assert_eq!(path.first(), path.last());
        for pair in path.windows(2) {
            prop_assert!(graph.neighbors(pair[0]).any(|v| v == pair[1]));
        }
    }
}
