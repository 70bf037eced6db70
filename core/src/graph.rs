use crate::error::QueryError;
use crate::model::{Actor, ActorId, CastRecord, Edge, Movie, MovieId, movie_key};
use crate::pathfinding_config::PathfindingConfig;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Which edges currently live in the actors' adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyMode {
    /// No edges; the starting point of a year-incremental build.
    Empty,
    /// Edges from every movie, weighted under the given config.
    Full,
    /// Edges added year by year through the scheduler.
    Incremental,
}

/// Owns every actor and movie. Relations between them are arena indices.
#[derive(Debug, Clone)]
pub struct ActorGraph {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_lookup: FxHashMap<String, ActorId>,
    movie_lookup: FxHashMap<String, MovieId>,
    adjacency: AdjacencyMode,
    weights: PathfindingConfig,
}

impl Default for ActorGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorGraph {
    pub fn new() -> Self {
        Self {
            actors: Vec::new(),
            movies: Vec::new(),
            actor_lookup: FxHashMap::default(),
            movie_lookup: FxHashMap::default(),
            adjacency: AdjacencyMode::Empty,
            weights: PathfindingConfig::default(),
        }
    }

    /// Builds a graph from records and materializes weights under `config`.
    /// Adjacency is left empty.
    pub fn from_records<I>(records: I, config: &PathfindingConfig) -> Self
    where
        I: IntoIterator<Item = CastRecord>,
    {
        let mut graph = Self::new();
        graph.ingest(records);
        graph.materialize_weights(config);
        graph
    }

    /// Adds records to the arena, reusing actors by name and movies by `title#@year`.
    pub fn ingest<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = CastRecord>,
    {
        let mut record_count = 0usize;
        for record in records {
            let movie_id = self.get_or_insert_movie(record.title, record.year);
            let actor_id = self.get_or_insert_actor(record.actor);

            let movie = &mut self.movies[movie_id.index()];
            if !movie.cast().contains(&actor_id) {
                movie.add_actor(actor_id);
            }
            record_count += 1;
        }

        info!(
            records = record_count,
            actors = self.actors.len(),
            movies = self.movies.len(),
            "ingested cast records"
        );
    }

    fn get_or_insert_actor(&mut self, name: String) -> ActorId {
        if let Some(&id) = self.actor_lookup.get(&name) {
            return id;
        }
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(Actor::new(name.clone()));
        self.actor_lookup.insert(name, id);
        id
    }

    fn get_or_insert_movie(&mut self, title: String, year: i32) -> MovieId {
        let key = movie_key(&title, year);
        if let Some(&id) = self.movie_lookup.get(&key) {
            return id;
        }
        let id = MovieId(self.movies.len() as u32);
        self.movies.push(Movie::new(title, year));
        self.movie_lookup.insert(key, id);
        id
    }

    /// Sets every movie's weight from its year under `config`. A fully built
    /// adjacency is rebuilt so stored edge weights stay in sync.
    pub fn materialize_weights(&mut self, config: &PathfindingConfig) {
        for movie in &mut self.movies {
            movie.weight = config.movie_weight(movie.year);
        }
        self.weights = config.clone();

        if self.adjacency == AdjacencyMode::Full {
            self.connect_all();
        }
    }

    pub fn weights(&self) -> &PathfindingConfig {
        &self.weights
    }

    /// Rebuilds the adjacency from every movie, in ingestion order.
    pub fn connect_all(&mut self) {
        self.reset_neighbors();
        for index in 0..self.movies.len() {
            self.connect_movie(MovieId(index as u32));
        }
        self.adjacency = AdjacencyMode::Full;
        debug!(edges = self.edge_count(), "built full actor graph");
    }

    /// Adds a symmetric edge between every pair of the movie's cast.
    pub(crate) fn connect_movie(&mut self, movie_id: MovieId) {
        let movie = &self.movies[movie_id.index()];
        let edge = Edge {
            movie: movie_id,
            weight: movie.weight,
        };

        for (first, second) in movie.cast_pairs() {
            self.actors[first.index()].add_neighbor(second, edge);
            self.actors[second.index()].add_neighbor(first, edge);
        }
    }

    /// Drops every edge; the next build starts from an empty adjacency.
    pub fn reset_neighbors(&mut self) {
        for actor in &mut self.actors {
            actor.clear_neighbors();
        }
        self.adjacency = AdjacencyMode::Empty;
    }

    pub(crate) fn mark_incremental(&mut self) {
        self.adjacency = AdjacencyMode::Incremental;
    }

    /// Makes sure the adjacency holds every movie weighted under `config`.
    pub fn ensure_full(&mut self, config: &PathfindingConfig) {
        if self.weights.weight_mode != config.weight_mode
            || self.weights.reference_year != config.reference_year
        {
            self.materialize_weights(config);
        }
        if self.adjacency != AdjacencyMode::Full {
            self.connect_all();
        }
    }

    pub fn adjacency(&self) -> AdjacencyMode {
        self.adjacency
    }

    pub fn find_actor(&self, name: &str) -> Option<ActorId> {
        self.actor_lookup.get(name).copied()
    }

    pub fn resolve_actor(&self, name: &str) -> Result<ActorId, QueryError> {
        self.find_actor(name)
            .ok_or_else(|| QueryError::UnknownActor(name.to_string()))
    }

    pub fn find_movie(&self, title: &str, year: i32) -> Option<MovieId> {
        self.movie_lookup.get(&movie_key(title, year)).copied()
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.index()]
    }

    pub fn movie(&self, id: MovieId) -> &Movie {
        &self.movies[id.index()]
    }

    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(index, actor)| (ActorId(index as u32), actor))
    }

    pub fn movies(&self) -> impl Iterator<Item = (MovieId, &Movie)> {
        self.movies
            .iter()
            .enumerate()
            .map(|(index, movie)| (MovieId(index as u32), movie))
    }

    pub fn neighbor_count(&self, id: ActorId) -> usize {
        self.actor(id).neighbors().len()
    }

    pub fn edge(&self, from: ActorId, to: ActorId) -> Option<Edge> {
        self.actor(from).edge_to(to)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Undirected edges currently in the adjacency.
    pub fn edge_count(&self) -> usize {
        self.actors.iter().map(|a| a.neighbors().len()).sum::<usize>() / 2
    }

    pub fn earliest_year(&self) -> Option<i32> {
        self.movies.iter().map(|m| m.year).min()
    }
}
