use sssp_solver::report::Tables;
use sssp_solver::{Dijkstra, GraphBuilder, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    // The fixed five-vertex graph the solver is demonstrated on.
    let graph = GraphBuilder::new()
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
        .expect("demo graph is well formed");

    let paths = Dijkstra::new()
        .shortest_paths(&graph, "a")
        .expect("`a` is a vertex of the demo graph");

    println!("{}", Tables::new(&paths));
}
