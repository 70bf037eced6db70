use crate::common::{CHAIN, CHAIN_WITH_SHORTCUT, TOWN, TOWN_ACTORS, graph_from};
use castpath_core::connectivity::union_find_first_year;
use castpath_core::{
    Algorithm, Connection, NOT_CONNECTED_YEAR, PathfindingConfig, QueryError, first_year_connected,
};

#[test]
fn test_union_find_chain_connects_in_later_year() {
    let mut graph = graph_from(CHAIN, &PathfindingConfig::default());
    let result = first_year_connected(&mut graph, "A", "C", Algorithm::UnionFind).unwrap();
    assert_eq!(result, Connection::ConnectedIn(2010));
    assert_eq!(result.year(), Some(2010));
}

#[test]
fn test_union_find_shortcut_connects_earlier() {
    let mut graph = graph_from(CHAIN_WITH_SHORTCUT, &PathfindingConfig::default());
    let a = graph.find_actor("A").unwrap();
    let c = graph.find_actor("C").unwrap();
    assert_eq!(union_find_first_year(&mut graph, a, c), Connection::ConnectedIn(2005));
}

#[test]
fn test_union_find_town_years() {
    let mut graph = graph_from(TOWN, &PathfindingConfig::default());
    let cases = [
        ("Ann", "Ben", 1994),
        ("Ann", "Dee", 1998),
        ("Ann", "Fay", 2003),
        ("Ann", "Gus", 2011),
        ("Y", "Z", 1990),
    ];

    for (first, second, year) in cases {
        let result = first_year_connected(&mut graph, first, second, Algorithm::UnionFind).unwrap();
        assert_eq!(result, Connection::ConnectedIn(year), "{first} -> {second}");
    }
}

#[test]
fn test_never_connected_returns_sentinel() {
    let mut graph = graph_from(TOWN, &PathfindingConfig::default());
    for algorithm in [Algorithm::UnionFind, Algorithm::Bfs] {
        let result = first_year_connected(&mut graph, "Ann", "Z", algorithm).unwrap();
        assert!(!result.is_connected());
        assert_eq!(result.year_or_sentinel(), NOT_CONNECTED_YEAR);
    }
}

#[test]
fn test_same_actor_connects_in_earliest_year() {
    let mut graph = graph_from(TOWN, &PathfindingConfig::default());
    for algorithm in [Algorithm::UnionFind, Algorithm::Bfs] {
        let result = first_year_connected(&mut graph, "Gus", "Gus", algorithm).unwrap();
        assert_eq!(result, Connection::ConnectedIn(1990));
    }
    assert_eq!(graph.earliest_year(), Some(1990));
}

#[test]
fn test_unknown_actor_fails_query() {
    let mut graph = graph_from(TOWN, &PathfindingConfig::default());
    let result = first_year_connected(&mut graph, "Ghost", "Ann", Algorithm::UnionFind);
    assert_eq!(result, Err(QueryError::UnknownActor("Ghost".to_string())));
}

#[test]
fn test_union_find_and_bfs_agree_on_every_pair() {
    let mut graph = graph_from(TOWN, &PathfindingConfig::default());

    for &first in TOWN_ACTORS {
        for &second in TOWN_ACTORS {
            let by_sets = first_year_connected(&mut graph, first, second, Algorithm::UnionFind).unwrap();
            let by_search = first_year_connected(&mut graph, first, second, Algorithm::Bfs).unwrap();
            assert_eq!(by_sets, by_search, "{first} -> {second}");
        }
    }
}
