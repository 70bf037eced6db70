mod connections;

use castpath_core::{ActorGraph, ActorPair, CastRecord, PathfindingConfig};

pub fn town_graph(config: &PathfindingConfig) -> ActorGraph {
    let rows = [
        ("A", "M1", 2000),
        ("B", "M1", 2000),
        ("B", "M2", 2010),
        ("C", "M2", 2010),
        ("A", "M3", 2005),
        ("C", "M3", 2005),
        ("Y", "Solo", 1990),
        ("Z", "Solo", 1990),
    ];
    ActorGraph::from_records(
        rows.iter().map(|&(actor, title, year)| CastRecord::new(actor, title, year)),
        config,
    )
}

pub fn pairs(names: &[(&str, &str)]) -> Vec<ActorPair> {
    names
        .iter()
        .map(|&(first, second)| ActorPair {
            first: first.to_string(),
            second: second.to_string(),
        })
        .collect()
}
