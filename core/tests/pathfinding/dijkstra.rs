use crate::common::{CHAIN, CHAIN_WITH_OLD_SHORTCUT, CHAIN_WITH_SHORTCUT, TOWN, TOWN_ACTORS, graph_from};
use castpath_core::{
    PathfindingConfig, QueryError, WeightMode, bfs_find_path, dijkstra_find_path, shortest_path,
};

#[test]
fn test_dijkstra_unweighted_chain() {
    let mut graph = graph_from(CHAIN, &PathfindingConfig::default());
    let (path, _) = shortest_path(&mut graph, "A", "C", WeightMode::Unweighted).unwrap();
    let path = path.unwrap();

    assert_eq!(path.actor_names(&graph), vec!["A", "B", "C"]);
    assert_eq!(path.movie_labels(&graph), vec!["M1#@2000", "M2#@2010"]);
    assert_eq!(path.total_weight, 2);
}

#[test]
fn test_dijkstra_weighted_takes_cheap_shortcut() {
    // M3 (2005) costs 11; A-B-C costs 16 + 6.
    let mut graph = graph_from(CHAIN_WITH_SHORTCUT, &PathfindingConfig::weighted());
    let (path, _) = shortest_path(&mut graph, "A", "C", WeightMode::Weighted).unwrap();
    let path = path.unwrap();

    assert_eq!(path.actor_names(&graph), vec!["A", "C"]);
    assert_eq!(path.movie_labels(&graph), vec!["M3#@2005"]);
    assert_eq!(path.total_weight, 11);
}

#[test]
fn test_dijkstra_weighted_avoids_expensive_shortcut() {
    // M3 (1960) costs 56; A-B-C costs 22.
    let mut graph = graph_from(CHAIN_WITH_OLD_SHORTCUT, &PathfindingConfig::weighted());
    let (path, _) = shortest_path(&mut graph, "A", "C", WeightMode::Weighted).unwrap();
    let path = path.unwrap();

    assert_eq!(path.actor_names(&graph), vec!["A", "B", "C"]);
    assert_eq!(path.total_weight, 22);

    let (path, _) = shortest_path(&mut graph, "A", "C", WeightMode::Unweighted).unwrap();
    assert_eq!(path.unwrap().movie_labels(&graph), vec!["M3#@1960"]);
}

#[test]
fn test_dijkstra_no_path() {
    let mut graph = graph_from(TOWN, &PathfindingConfig::default());
    let (path, visited) = shortest_path(&mut graph, "Ann", "Z", WeightMode::Weighted).unwrap();

    assert!(path.is_none());
    assert_eq!(visited, 7);
}

#[test]
fn test_dijkstra_same_actor() {
    let mut graph = graph_from(CHAIN, &PathfindingConfig::default());
    let (path, _) = shortest_path(&mut graph, "B", "B", WeightMode::Weighted).unwrap();
    let path = path.unwrap();

    assert_eq!(path.actor_names(&graph), vec!["B"]);
    assert_eq!(path.hop_count(), 0);
    assert_eq!(path.total_weight, 0);
}

#[test]
fn test_dijkstra_unknown_actor() {
    let mut graph = graph_from(CHAIN, &PathfindingConfig::default());
    let result = shortest_path(&mut graph, "Nobody", "A", WeightMode::Unweighted);
    assert_eq!(result, Err(QueryError::UnknownActor("Nobody".to_string())));
}

#[test]
fn test_dijkstra_weighted_town() {
    let mut graph = graph_from(TOWN, &PathfindingConfig::weighted());
    let (path, _) = shortest_path(&mut graph, "Ann", "Gus", WeightMode::Weighted).unwrap();
    let path = path.unwrap();

    assert_eq!(path.actor_names(&graph), vec!["Ann", "Ben", "Gus"]);
    assert_eq!(path.movie_labels(&graph), vec!["Harbor Lights#@1994", "Second Wind#@2011"]);
    assert_eq!(path.total_weight, 27);
}

#[test]
fn test_unit_weight_dijkstra_matches_bfs_hops() {
    let config = PathfindingConfig::default();
    let mut graph = graph_from(TOWN, &config);

    for &first in TOWN_ACTORS {
        for &second in TOWN_ACTORS {
            let start = graph.find_actor(first).unwrap();
            let end = graph.find_actor(second).unwrap();

            let (bfs_path, _) = bfs_find_path(&mut graph, start, end);
            let (dijkstra_path, _) = dijkstra_find_path(&mut graph, start, end, &config);

            match (bfs_path, dijkstra_path) {
                (Some(bfs_path), Some(dijkstra_path)) => {
                    assert_eq!(bfs_path.hop_count(), dijkstra_path.hop_count(), "{first} -> {second}");
                    assert_eq!(dijkstra_path.total_weight, dijkstra_path.hop_count() as u64);
                }
                (None, None) => {}
                other => panic!("{first} -> {second} disagreed: {other:?}"),
            }
        }
    }
}
