use castpath_core::{ActorGraph, ActorPair, ActorPath, Connection};

pub const PATH_HEADER: &str = "(actor)--[movie#@year]-->(actor)--...";
pub const CONNECTIONS_HEADER: &str = "Actor1\tActor2\tYear";

/// `(A)--[M1#@2000]-->(B)--[M2#@2010]-->(C)`
pub fn format_path(path: &ActorPath, graph: &ActorGraph) -> String {
    let mut line = String::new();

    for step in &path.steps {
        if let Some(movie) = step.via {
            line.push_str(&format!("--[{}]-->", graph.movie(movie).label()));
        }
        line.push_str(&format!("({})", graph.actor(step.actor).name));
    }

    line
}

/// `A<TAB>B<TAB>YEAR`, with the sentinel year for pairs never connected.
pub fn format_connection(pair: &ActorPair, connection: Connection) -> String {
    format!(
        "{}\t{}\t{}",
        pair.first,
        pair.second,
        connection.year_or_sentinel()
    )
}
