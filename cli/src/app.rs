use castpath_core::{ActorGraph, ActorPair, PathfindingConfig, load_actor_pairs, load_cast_file};
use std::{error::Error, path::{Path, PathBuf}};
use tracing::info;

pub struct CastPathApp {
    pub casts_path: PathBuf,
    pub pairs_path: PathBuf,
}

impl CastPathApp {
    pub fn new(casts_path: &Path, pairs_path: &Path) -> Result<Self, Box<dyn Error>> {
        check_input_file(casts_path)?;
        check_input_file(pairs_path)?;

        Ok(Self {
            casts_path: casts_path.to_path_buf(),
            pairs_path: pairs_path.to_path_buf(),
        })
    }

    /// Builds the graph with weights materialized; edges are left for the query engines.
    pub fn load_graph(&self, config: &PathfindingConfig) -> Result<ActorGraph, Box<dyn Error>> {
        let parsed = load_cast_file(&self.casts_path)?;
        if parsed.skipped > 0 {
            info!(skipped = parsed.skipped, "ignored malformed cast rows");
        }
        Ok(ActorGraph::from_records(parsed.records, config))
    }

    pub fn load_pairs(&self) -> Result<Vec<ActorPair>, Box<dyn Error>> {
        Ok(load_actor_pairs(&self.pairs_path)?)
    }
}

fn check_input_file(path: &Path) -> Result<(), Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("File does not exist: {:?}", path).into());
    }
    if std::fs::metadata(path)?.len() == 0 {
        return Err(format!("File is empty: {:?}", path).into());
    }
    Ok(())
}
