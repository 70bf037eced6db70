use rustc_hash::FxHashMap;
use std::fmt;

/// Index of an actor inside the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub(crate) u32);

/// Index of a movie inside the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(pub(crate) u32);

impl ActorId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl MovieId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One parsed row of the cast file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastRecord {
    pub actor: String,
    pub title: String,
    pub year: i32,
}

impl CastRecord {
    pub fn new(actor: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            actor: actor.into(),
            title: title.into(),
            year,
        }
    }
}

/// Cheapest known movie linking two actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub movie: MovieId,
    pub weight: u64,
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    neighbors: Vec<ActorId>,
    edges: FxHashMap<ActorId, Edge>,
}

impl Actor {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            neighbors: Vec::new(),
            edges: FxHashMap::default(),
        }
    }

    pub fn neighbors(&self) -> &[ActorId] {
        &self.neighbors
    }

    pub fn edge_to(&self, neighbor: ActorId) -> Option<Edge> {
        self.edges.get(&neighbor).copied()
    }

    /// Records `edge` towards `neighbor`. An existing edge is only replaced
    /// by a strictly cheaper one.
    pub(crate) fn add_neighbor(&mut self, neighbor: ActorId, edge: Edge) {
        match self.edges.get_mut(&neighbor) {
            Some(existing) => {
                if edge.weight < existing.weight {
                    *existing = edge;
                }
            }
            None => {
                self.neighbors.push(neighbor);
                self.edges.insert(neighbor, edge);
            }
        }
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
        self.edges.clear();
    }
}

#[derive(Debug, Clone)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub weight: u64,
    cast: Vec<ActorId>,
}

impl Movie {
    pub(crate) fn new(title: String, year: i32) -> Self {
        Self {
            title,
            year,
            weight: 1,
            cast: Vec::new(),
        }
    }

    pub fn cast(&self) -> &[ActorId] {
        &self.cast
    }

    pub(crate) fn add_actor(&mut self, actor: ActorId) {
        self.cast.push(actor);
    }

    /// `title#@year`, both the identity key and the printed edge label.
    pub fn label(&self) -> String {
        movie_key(&self.title, self.year)
    }

    /// Every unordered pair of cast members, in cast order.
    pub fn cast_pairs(&self) -> impl Iterator<Item = (ActorId, ActorId)> + '_ {
        self.cast.iter().enumerate().flat_map(move |(i, &first)| {
            self.cast[i + 1..].iter().map(move |&second| (first, second))
        })
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#@{}", self.title, self.year)
    }
}

pub(crate) fn movie_key(title: &str, year: i32) -> String {
    format!("{}#@{}", title, year)
}
