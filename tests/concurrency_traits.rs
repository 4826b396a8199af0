use misgraph::{Graph, NodeId};
use std::thread;

fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn graph_is_send_and_sync() {
    assert_send::<Graph<u64, i32>>();
    assert_sync::<Graph<u64, i32>>();
    assert_send::<Graph<String, f64>>();
    assert_sync::<Graph<String, f64>>();
}

#[test]
fn concurrent_writers_and_readers_keep_adjacency_consistent() {
    let g: Graph<usize, u32> = Graph::undirected();
    let hub = g.add_node(usize::MAX);

    thread::scope(|s| {
        for t in 0..4 {
            let g = &g;
            s.spawn(move || {
                for i in 0..50 {
                    let id = g.add_node(t * 100 + i);
                    g.add_undirected_edge(hub, id, 1).unwrap();
                }
            });
        }
        for _ in 0..2 {
            let g = &g;
            s.spawn(move || {
                for _ in 0..100 {
                    for id in g.neighbors(hub) {
                        // A neighbour observed under one lock may be read again
                        // under another; it can only have gained arcs since.
                        assert!(g.contains_node(id));
                        assert!(g.has_neighbor(id, hub));
                    }
                }
            });
        }
    });

    assert_eq!(g.node_count(), 201);
    assert_eq!(g.degree(hub), 200);
    assert_eq!(g.edge_count(), 400);
}

#[test]
fn concurrent_removals_scrub_every_reference() {
    let g: Graph<u64, u8> = Graph::undirected();
    let ids: Vec<NodeId> = (0..64).map(|i| g.add_node(i)).collect();
    for w in ids.windows(2) {
        g.add_undirected_edge(w[0], w[1], 1).unwrap();
    }

    thread::scope(|s| {
        for chunk in ids.chunks(16) {
            let g = &g;
            s.spawn(move || {
                for &id in chunk.iter().step_by(2) {
                    g.remove_node(id).unwrap();
                }
            });
        }
    });

    assert_eq!(g.node_count(), 32);
    assert_eq!(g.edge_count(), 0, "every path edge touched a removed node");
    for id in g.node_ids() {
        assert!(g.neighbors(id).is_empty());
    }
}

#[test]
fn solver_runs_on_shared_graph_from_many_threads() {
    let g = misgraph::io::graph6::parse::<u32>("DQc").unwrap();
    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| g.maximum_independent_set().len()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 3);
        }
    });
}
