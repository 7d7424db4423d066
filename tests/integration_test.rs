/// Integration tests
///
/// Tests the complete workflow from edge lists (in memory or on disk) to a
/// classified shortest-path outcome

use rust_bellman_ford::{
    bellman_ford, export_edges, import_edges, query, shortest_path, AlgorithmError, EdgeListFormat,
    ExportOptions, ImportOptions, IndexedGraph, RelaxationOptions, RelaxationOutcome,
    ShortestPathOutcome, VertexRole, WeightedEdge,
};
use tempfile::TempDir;

fn base_edges() -> Vec<(u32, u32, i64)> {
    vec![(1, 2, 2), (1, 3, 4), (2, 3, 1), (2, 4, 2), (3, 5, 4), (4, 5, 2)]
}

/// Path 1 -> 2 -> 4 -> 5 costs 6
#[test]
fn test_scenario_shortest_distance() {
    let outcome = shortest_path(base_edges(), &1, &5).unwrap();
    assert_eq!(outcome, ShortestPathOutcome::Distance(6));
}

/// Cycle 1 -> 2 -> 4 -> 5 -> 1 sums to -1
#[test]
fn test_scenario_negative_cycle() {
    let mut edges = base_edges();
    edges.push((5, 1, -7));

    let outcome = shortest_path(edges, &1, &5).unwrap();
    assert_eq!(outcome, ShortestPathOutcome::NegativeCycleDetected);
}

/// 1 -> 3 -> 5 -> 6 costs 10, but going through 2 first saves one: 1 -> 2 -> 3 -> 5 -> 6 costs 9
#[test]
fn test_scenario_path_through_late_vertex() {
    let edges: Vec<(u32, u32, i64)> = vec![(1, 2, 2), (1, 3, 4), (2, 3, 1), (2, 4, 2), (3, 5, 4), (5, 6, 2)];

    let outcome = shortest_path(edges, &1, &6).unwrap();
    assert_eq!(outcome, ShortestPathOutcome::Distance(9));
}

#[test]
fn test_scenario_empty_edge_list() {
    let edges: Vec<(u32, u32, i64)> = Vec::new();

    let err = shortest_path(edges.clone(), &1, &2).unwrap_err();
    assert!(matches!(err, AlgorithmError::UnknownVertex { role: VertexRole::Source, .. }));

    // Any source/destination pair fails the same way
    let err = shortest_path(edges, &7, &7).unwrap_err();
    assert!(matches!(err, AlgorithmError::UnknownVertex { .. }));
}

#[test]
fn test_scenario_source_is_destination() {
    let edges: Vec<(u32, u32, i64)> = vec![(1, 2, 5)];

    let outcome = shortest_path(edges, &1, &1).unwrap();
    assert_eq!(outcome, ShortestPathOutcome::Distance(0));
}

#[test]
fn test_unreachable_is_distinct_from_unknown() {
    let edges = base_edges();

    // 1 exists but nothing leads back to it
    assert_eq!(shortest_path(edges.clone(), &5, &1).unwrap(), ShortestPathOutcome::Unreachable);

    // 6 does not exist at all
    let err = shortest_path(edges, &5, &6).unwrap_err();
    assert_eq!(
        err,
        AlgorithmError::UnknownVertex {
            role: VertexRole::Destination,
            vertex: "6".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unknown destination vertex 6: it appears in no edge");
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let graph: IndexedGraph<u32, i64> = IndexedGraph::from_edges(base_edges());
    let options = RelaxationOptions::default();

    let first: Vec<_> = (1..=5).map(|v| query(&graph, &1, &v, &options).unwrap()).collect();
    for _ in 0..10 {
        let again: Vec<_> = (1..=5).map(|v| query(&graph, &1, &v, &options).unwrap()).collect();
        assert_eq!(first, again);
    }

    let fresh: Vec<_> = (1..=5)
        .map(|v| shortest_path(base_edges(), &1, &v).unwrap())
        .collect();
    assert_eq!(first, fresh);
}

#[test]
fn test_string_vertices() {
    let edges = vec![
        WeightedEdge::new("depot".to_string(), "north".to_string(), 7),
        WeightedEdge::new("depot".to_string(), "south".to_string(), 3),
        WeightedEdge::new("south".to_string(), "north".to_string(), -2),
        WeightedEdge::new("north".to_string(), "port".to_string(), 4),
    ];

    let outcome = shortest_path(edges, &"depot".to_string(), &"port".to_string()).unwrap();
    assert_eq!(outcome, ShortestPathOutcome::Distance(5));
}

#[test]
fn test_full_distance_table() {
    let graph: IndexedGraph<char, i32> = IndexedGraph::from_edges(vec![
        ('s', 'a', 6),
        ('s', 'b', 7),
        ('a', 'c', 5),
        ('a', 'd', -4),
        ('a', 'b', 8),
        ('b', 'c', -3),
        ('b', 'd', 9),
        ('c', 'a', -2),
        ('d', 's', 2),
        ('d', 'c', 7),
    ]);

    let RelaxationOutcome::Converged(table) =
        bellman_ford(&graph, &'s', &RelaxationOptions::default()).unwrap()
    else {
        panic!("graph has no negative cycle");
    };

    let distances: Vec<(char, Option<i32>)> = table.iter().map(|(v, d)| (*v, d.finite())).collect();
    assert_eq!(
        distances,
        vec![
            ('s', Some(0)),
            ('a', Some(2)),
            ('b', Some(7)),
            ('c', Some(4)),
            ('d', Some(-2)),
        ]
    );
}

#[test]
fn test_csv_file_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.csv");
    std::fs::write(
        &path,
        "tail,head,weight\n1,2,2\n1,3,4\n2,3,1\n2,4,2\n3,5,4\n4,5,2\n5,1,-7\n",
    )
    .unwrap();

    let imported = import_edges(&path, &ImportOptions::default()).unwrap();
    assert_eq!(imported.stats.edges_imported, 7);

    let outcome = shortest_path(imported.edges, &"1".to_string(), &"5".to_string()).unwrap();
    assert_eq!(outcome, ShortestPathOutcome::NegativeCycleDetected);
}

#[test]
fn test_json_file_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.json");

    let edges: Vec<WeightedEdge<u32, i64>> = base_edges().into_iter().map(WeightedEdge::from).collect();
    export_edges(&edges, &path, EdgeListFormat::Json, &ExportOptions::default()).unwrap();

    let imported = import_edges(&path, &ImportOptions::default()).unwrap();
    let graph = IndexedGraph::from_edges(imported.edges);
    let options = RelaxationOptions::default();

    assert_eq!(
        query(&graph, &"1".to_string(), &"5".to_string(), &options).unwrap(),
        ShortestPathOutcome::Distance(6.0)
    );
    assert_eq!(
        query(&graph, &"4".to_string(), &"3".to_string(), &options).unwrap(),
        ShortestPathOutcome::Unreachable
    );
}
