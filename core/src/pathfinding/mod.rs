pub mod bfs;
pub mod dijkstra;
pub mod utils;

pub use bfs::{bfs_find_path, bfs_first_year, bfs_traverse};
pub use dijkstra::dijkstra_find_path;
pub use utils::{ActorPath, INFINITE_DISTANCE, PathResult, PathStep, TraversalState};

use crate::error::QueryError;
use crate::graph::ActorGraph;
use crate::pathfinding_config::{PathfindingConfig, WeightMode};
use tracing::debug;

/// Lowest-cost path between two actors by name. The reference year of the
/// graph's current weights is kept; only the weight mode changes.
pub fn shortest_path(
    graph: &mut ActorGraph,
    start: &str,
    end: &str,
    weight_mode: WeightMode,
) -> Result<PathResult, QueryError> {
    let start_id = graph.resolve_actor(start)?;
    let end_id = graph.resolve_actor(end)?;

    let config = PathfindingConfig::new(weight_mode, graph.weights().reference_year);
    let (path, visited) = dijkstra_find_path(graph, start_id, end_id, &config);

    debug!(
        start,
        end,
        weighted = weight_mode.is_weighted(),
        hops = path.as_ref().map(|p| p.hop_count()),
        visited,
        "answered path query"
    );
    Ok((path, visited))
}
