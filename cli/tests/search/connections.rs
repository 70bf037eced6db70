use super::{pairs, town_graph};
use castpath::json_output::create_json_output;
use castpath::run_connection_queries;
use castpath_core::{Algorithm, PathfindingConfig};

#[test]
fn test_connection_queries_write_years() {
    let mut graph = town_graph(&PathfindingConfig::default());
    let queries = pairs(&[("A", "B"), ("A", "C"), ("Y", "Z")]);

    for algorithm in [Algorithm::UnionFind, Algorithm::Bfs] {
        let mut out = Vec::new();
        let report = run_connection_queries(&mut graph, &queries, algorithm, &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        assert_eq!(
            written,
            "Actor1\tActor2\tYear\nA\tB\t2000\nA\tC\t2005\nY\tZ\t1990\n"
        );
        assert_eq!(report.answered, 3);
    }
}

#[test]
fn test_connection_queries_sentinel_and_failures() {
    let mut graph = town_graph(&PathfindingConfig::default());
    let queries = pairs(&[("A", "Z"), ("Nobody", "A")]);
    let mut out = Vec::new();

    let report = run_connection_queries(&mut graph, &queries, Algorithm::UnionFind, &mut out).unwrap();
    let written = String::from_utf8(out).unwrap();

    assert_eq!(written, "Actor1\tActor2\tYear\nA\tZ\t9999\n");
    assert_eq!(report.disconnected.len(), 1);
    assert_eq!(report.failures.len(), 1);

    let json = serde_json::to_value(create_json_output(&report)).unwrap();
    assert_eq!(json["query"]["mode"], "connections (ufind)");
    assert_eq!(json["result"]["answered"], 1);
    assert_eq!(json["result"]["failures"][0]["first"], "Nobody");
    assert_eq!(json["stats"]["actors"], 5);
}
