pub mod connectivity;
pub mod error;
pub mod graph;
pub mod model;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod queue;
pub mod schedule;

// Re-export commonly used items
pub use connectivity::{Connection, DisjointSet, NOT_CONNECTED_YEAR, first_year_connected};
pub use error::{Error, QueryError, Result};
pub use graph::{ActorGraph, AdjacencyMode};
pub use model::{Actor, ActorId, CastRecord, Edge, Movie, MovieId};
pub use parsing::{ActorPair, ParsedCasts, load_actor_pairs, load_cast_file, parse_actor_pairs, parse_cast_records};
pub use pathfinding::{ActorPath, PathStep, bfs_find_path, dijkstra_find_path, shortest_path};
pub use pathfinding_config::{Algorithm, DEFAULT_REFERENCE_YEAR, PathfindingConfig, WeightMode};
pub use schedule::{RevealMode, YearSchedule};
