#![allow(dead_code)]

use castpath_core::{ActorGraph, CastRecord, PathfindingConfig};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn records(rows: &[(&str, &str, i32)]) -> Vec<CastRecord> {
    rows.iter()
        .map(|&(actor, title, year)| CastRecord::new(actor, title, year))
        .collect()
}

pub fn graph_from(rows: &[(&str, &str, i32)], config: &PathfindingConfig) -> ActorGraph {
    ActorGraph::from_records(records(rows), config)
}

/// A and B share M1 (2000), B and C share M2 (2010).
pub const CHAIN: &[(&str, &str, i32)] = &[
    ("A", "M1", 2000),
    ("B", "M1", 2000),
    ("B", "M2", 2010),
    ("C", "M2", 2010),
];

/// Chain plus a direct A–C movie in 2005.
pub const CHAIN_WITH_SHORTCUT: &[(&str, &str, i32)] = &[
    ("A", "M1", 2000),
    ("B", "M1", 2000),
    ("B", "M2", 2010),
    ("C", "M2", 2010),
    ("A", "M3", 2005),
    ("C", "M3", 2005),
];

/// Chain plus a direct A–C movie from 1960, costlier than going through B.
pub const CHAIN_WITH_OLD_SHORTCUT: &[(&str, &str, i32)] = &[
    ("A", "M1", 2000),
    ("B", "M1", 2000),
    ("B", "M2", 2010),
    ("C", "M2", 2010),
    ("A", "M3", 1960),
    ("C", "M3", 1960),
];

/// Two components across several years; Y and Z only ever meet each other.
pub const TOWN: &[(&str, &str, i32)] = &[
    ("Ann", "Harbor Lights", 1994),
    ("Ben", "Harbor Lights", 1994),
    ("Cid", "Harbor Lights", 1994),
    ("Cid", "Night Ferry", 1998),
    ("Dee", "Night Ferry", 1998),
    ("Eve", "Quiet Hills", 1998),
    ("Fay", "Quiet Hills", 1998),
    ("Dee", "Long Road", 2003),
    ("Eve", "Long Road", 2003),
    ("Ann", "Long Road", 2003),
    ("Gus", "Harbor Lights", 2011),
    ("Fay", "Harbor Lights", 2011),
    ("Ben", "Second Wind", 2011),
    ("Gus", "Second Wind", 2011),
    ("Y", "Solo", 1990),
    ("Z", "Solo", 1990),
];

pub const TOWN_ACTORS: &[&str] = &["Ann", "Ben", "Cid", "Dee", "Eve", "Fay", "Gus", "Y", "Z"];

pub fn write_tsv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}
