//! End-to-end scenarios through the public API
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use graphkit_core::{
    dijkstra, from_text, kruskal_mst, max_flow, prim_mst, run, shortest_path_table, AlgorithmError,
    AlgorithmOutput, AlgorithmRequest, Edge, EngineConfig, Graph, NodeId,
};

fn triangle() -> Graph {
    Graph::from_triples([1, 2, 3], [(1, 2, 4.0), (2, 3, 2.0), (1, 3, 5.0)], false).unwrap()
}

fn sorted(mut edges: Vec<Edge>) -> Vec<(usize, usize, f64)> {
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    edges
        .into_iter()
        .map(|e| (e.from.as_usize(), e.to.as_usize(), e.weight))
        .collect()
}

#[test]
fn triangle_minimum_spanning_tree() {
    let _ = env_logger::builder().is_test(true).try_init();
    let graph = triangle();
    let expected = vec![(2, 3, 2.0), (1, 2, 4.0)];

    let prim = prim_mst(&graph, NodeId(1)).unwrap();
    let kruskal = kruskal_mst(&graph);

    assert_eq!(sorted(prim.clone().into_vec()), expected);
    assert_eq!(sorted(kruskal.clone().into_vec()), expected);
    assert_eq!(prim.total_weight(), 6.0);
    assert_eq!(kruskal.total_weight(), 6.0);
}

#[test]
fn triangle_shortest_paths() {
    let graph = triangle();

    let table = shortest_path_table(&graph, NodeId(1), true).unwrap();
    assert_eq!(table.distance(NodeId(1)), Some(0.0));
    assert_eq!(table.distance(NodeId(2)), Some(4.0));
    // the direct edge (1,3,5) beats 1 -> 2 -> 3 at 6
    assert_eq!(table.distance(NodeId(3)), Some(5.0));

    let tree = dijkstra(&graph, NodeId(1), true).unwrap();
    assert_eq!(
        tree.into_vec(),
        vec![
            Edge::new(NodeId(1), NodeId(2), 4.0),
            Edge::new(NodeId(1), NodeId(3), 5.0),
        ]
    );
}

#[test]
fn diamond_max_flow() {
    // A=1, B=2, C=3, D=4
    let graph = Graph::from_triples(
        [1, 2, 3, 4],
        [(1, 2, 3.0), (1, 3, 2.0), (2, 3, 1.0), (2, 4, 2.0), (3, 4, 3.0)],
        true,
    )
    .unwrap();

    // cut {A} | {B, C, D} has capacity 3 + 2
    assert_eq!(max_flow(&graph, NodeId(1), NodeId(4)).unwrap(), 5.0);
}

#[test]
fn disconnected_prim_is_empty() {
    let graph = Graph::from_triples([1, 2], [], false).unwrap();
    assert!(prim_mst(&graph, NodeId(1)).unwrap().is_empty());
}

#[test]
fn directed_dijkstra_rejects_node_without_inbound_edge() {
    let graph = Graph::from_triples([1, 2, 3], [(1, 2, 1.0), (2, 3, 1.0), (3, 2, 1.0)], true).unwrap();

    assert_eq!(
        dijkstra(&graph, NodeId(1), false).unwrap_err(),
        AlgorithmError::DisconnectedOrCyclicGraph(NodeId(1))
    );
    // the same graph is accepted once edges are walked both ways
    assert_eq!(dijkstra(&graph, NodeId(1), true).unwrap().len(), 2);
}

#[test]
fn imported_file_dispatched_by_name() {
    let text = "enableDirectedEdges: false\n\
                Node 1: (120,80)\n\
                Node 2: (240,80)\n\
                Node 3: (180,200)\n\
                (1:2,4)\n\
                (2:3,2)\n\
                (1:3,5)\n";
    let graph = from_text(text).unwrap();
    let config = EngineConfig::default();

    for name in ["prim", "Kruskal"] {
        let request = AlgorithmRequest::parse(name, Some(NodeId(1)), None).unwrap();
        let output = run(&graph, &request, &config).unwrap();
        assert_eq!(output.highlighted_edges().total_weight(), 6.0, "{}", name);
    }

    let request = AlgorithmRequest::parse("dijkstra", Some(NodeId(3)), None).unwrap();
    match run(&graph, &request, &config).unwrap() {
        AlgorithmOutput::ShortestPaths(paths) => {
            assert_eq!(paths.distances.distance(NodeId(1)), Some(5.0));
            assert_eq!(paths.distances.path_to(NodeId(1)), Some(vec![NodeId(3), NodeId(1)]));
        }
        other => panic!("unexpected output {:?}", other),
    }

    // undirected canvas cannot run max flow
    let request = AlgorithmRequest::parse("ford_fulkerson", Some(NodeId(1)), Some(NodeId(3))).unwrap();
    assert_eq!(
        run(&graph, &request, &config).unwrap_err(),
        AlgorithmError::UndirectedNotSupported
    );
}
