use sssp_solver::report::Tables;
use sssp_solver::{Dijkstra, Error, Graph, GraphBuilder, NamedGraph, ShortestPathAlgorithm};

// Test helper building the five-vertex reference graph:
//   a -> d (7), b -> a (3), d -> b (2), b -> c (4),
//   d -> c (5), e -> d (4), c -> e (6)
fn reference_graph() -> NamedGraph<u64> {
    GraphBuilder::new()
        .vertex("a")
        .vertex("b")
        .vertex("c")
        .vertex("d")
        .vertex("e")
        .edge("a", "d", 7u64)
        .edge("b", "a", 3)
        .edge("d", "b", 2)
        .edge("b", "c", 4)
        .edge("d", "c", 5)
        .edge("e", "d", 4)
        .edge("c", "e", 6)
        .build()
        .unwrap()
}

#[test]
fn reference_graph_distances() {
    let graph = reference_graph();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(paths.source, "a");
    assert_eq!(paths.distances["a"], 0, "source distance must be zero");
    assert_eq!(paths.distances["d"], 7);
    assert_eq!(paths.distances["b"], 9);
    assert_eq!(paths.distances["c"], 12, "a -> d -> c beats a -> d -> b -> c");
    assert_eq!(paths.distances["e"], 18);
}

#[test]
fn reference_graph_predecessors() {
    let graph = reference_graph();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(paths.predecessors["d"], "a");
    assert_eq!(paths.predecessors["b"], "d");
    assert_eq!(paths.predecessors["c"], "d");
    assert_eq!(paths.predecessors["e"], "c");
    assert!(
        !paths.predecessors.contains_key("a"),
        "the source has no predecessor"
    );
}

#[test]
fn reference_graph_path_reconstruction() {
    let graph = reference_graph();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(
        paths.path_to("e"),
        Some(vec!["a", "d", "c", "e"]),
        "the only route into e goes through the cheapest path to c"
    );
    assert_eq!(paths.path_to("a"), Some(vec!["a"]));
}

#[test]
fn missing_source_is_an_error() {
    let graph = reference_graph();
    let result = Dijkstra::new().shortest_paths(&graph, "z");

    match result {
        Err(Error::SourceNotFound(name)) => assert_eq!(name, "z"),
        other => panic!("expected SourceNotFound, got {:?}", other),
    }
}

#[test]
fn empty_graph_cannot_contain_the_source() {
    let graph = GraphBuilder::<u64>::new().build().unwrap();
    let result = Dijkstra::new().shortest_paths(&graph, "a");

    assert!(matches!(result, Err(Error::SourceNotFound(_))));
}

#[test]
fn single_vertex_graph() {
    let graph = GraphBuilder::<u64>::new().vertex("a").build().unwrap();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(paths.distances["a"], 0);
    assert!(paths.predecessors.is_empty());
}

#[test]
fn unreachable_vertices_keep_the_sentinel() {
    // c has no incoming edges, so it stays unreachable from a.
    let graph = GraphBuilder::new()
        .vertex("a")
        .vertex("b")
        .vertex("c")
        .edge("a", "b", 1u64)
        .build()
        .unwrap();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(paths.distances["c"], u64::MAX);
    assert!(!paths.predecessors.contains_key("c"));
    assert!(!paths.is_reachable("c"));
    assert_eq!(paths.path_to("c"), None);
}

#[test]
fn sink_vertex_gets_a_final_distance() {
    // b has no outgoing edges; it must still be selected and finalized.
    let graph = GraphBuilder::new()
        .vertex("a")
        .vertex("b")
        .edge("a", "b", 5u64)
        .build()
        .unwrap();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(paths.distances["b"], 5);
    assert_eq!(paths.predecessors["b"], "a");
}

#[test]
fn zero_weight_edges_are_relaxed() {
    let graph = GraphBuilder::new()
        .vertex("a")
        .vertex("b")
        .edge("a", "b", 0u64)
        .build()
        .unwrap();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(paths.distances["b"], 0);
    assert_eq!(paths.predecessors["b"], "a");
}

#[test]
fn equal_distance_ties_do_not_affect_distances() {
    // Two shortest paths of weight 2 reach d; whichever predecessor is
    // recorded, the distance is fixed.
    let graph = GraphBuilder::new()
        .vertex("a")
        .vertex("b")
        .vertex("c")
        .vertex("d")
        .edge("a", "b", 1u64)
        .edge("a", "c", 1)
        .edge("b", "d", 1)
        .edge("c", "d", 1)
        .build()
        .unwrap();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();

    assert_eq!(paths.distances["d"], 2);
    let pred = paths.predecessors["d"].as_str();
    assert!(pred == "b" || pred == "c");
}

#[test]
fn repeated_solves_are_identical() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    let first = dijkstra.shortest_paths(&graph, "a").unwrap();
    let second = dijkstra.shortest_paths(&graph, "a").unwrap();

    assert_eq!(first, second, "a solve must not leave state behind");
}

#[test]
fn solves_from_different_sources_reuse_the_graph() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    let from_e = dijkstra.shortest_paths(&graph, "e").unwrap();
    assert_eq!(from_e.distances["d"], 4);
    assert_eq!(from_e.distances["b"], 6);

    // The earlier solve must not have disturbed the graph.
    let from_a = dijkstra.shortest_paths(&graph, "a").unwrap();
    assert_eq!(from_a.distances["e"], 18);
}

#[test]
fn tables_render_every_vertex_and_recorded_predecessor() {
    let graph = reference_graph();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();
    let rendered = Tables::new(&paths).to_string();

    assert!(rendered.contains("Distance Table:"));
    assert!(rendered.contains("Predecessor Table:"));
    for vertex in graph.vertices() {
        assert!(
            rendered.contains(&format!("vertex: {}", vertex)),
            "distance section should mention `{}`",
            vertex
        );
    }
    assert!(rendered.contains("distance: 18"));
    assert!(rendered.contains("predecessor: c"));
}

#[test]
fn tables_render_unreachable_vertices_as_inf() {
    let graph = GraphBuilder::new()
        .vertex("a")
        .vertex("b")
        .edge("a", "a", 1u64)
        .build()
        .unwrap();
    let paths = Dijkstra::new().shortest_paths(&graph, "a").unwrap();
    let rendered = Tables::new(&paths).to_string();

    assert!(rendered.contains("vertex: b\t| distance: INF"));
}
