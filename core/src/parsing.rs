use crate::error::{Error, Result};
use crate::model::CastRecord;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{info, warn};

/// Records kept from a cast file, plus how many data rows were dropped.
#[derive(Debug, Default)]
pub struct ParsedCasts {
    pub records: Vec<CastRecord>,
    pub skipped: usize,
}

/// One query line: two actor names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPair {
    pub first: String,
    pub second: String,
}

/// Reads and parses a cast file. Unreadable, empty, or record-less files
/// are errors; malformed rows are only counted.
pub fn load_cast_file(path: &Path) -> Result<ParsedCasts> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }

    let parsed = parse_cast_records(BufReader::new(file))?;
    if parsed.records.is_empty() {
        return Err(Error::NoRecords(path.to_path_buf()));
    }

    info!(
        path = %path.display(),
        records = parsed.records.len(),
        skipped = parsed.skipped,
        "loaded cast file"
    );
    Ok(parsed)
}

/// Parses `actor<TAB>title<TAB>year` rows after a header line. Rows that are
/// not valid UTF-8 are skipped like any other malformed row.
pub fn parse_cast_records<R: BufRead>(reader: R) -> Result<ParsedCasts> {
    let mut parsed = ParsedCasts::default();

    for (line_index, row) in reader.split(b'\n').enumerate().skip(1) {
        let row = row?;
        let record = match std::str::from_utf8(&row) {
            Ok(line) => {
                let line = line.trim_end_matches('\r');
                if line.is_empty() {
                    continue;
                }
                parse_cast_line(line)
            }
            Err(_) => None,
        };

        match record {
            Some(record) => parsed.records.push(record),
            None => {
                warn!(line = line_index + 1, "skipping malformed cast record");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

fn parse_cast_line(line: &str) -> Option<CastRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [actor, title, year] = fields.as_slice() else {
        return None;
    };
    let year = year.trim().parse::<i32>().ok()?;

    Some(CastRecord::new(*actor, *title, year))
}

/// Reads a pair file. Rows with fewer than two names are dropped.
pub fn load_actor_pairs(path: &Path) -> Result<Vec<ActorPair>> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }
    parse_actor_pairs(BufReader::new(file))
}

pub fn parse_actor_pairs<R: BufRead>(reader: R) -> Result<Vec<ActorPair>> {
    let mut pairs = Vec::new();

    for (line_index, row) in reader.split(b'\n').enumerate().skip(1) {
        let row = row?;
        let Ok(line) = std::str::from_utf8(&row) else {
            warn!(line = line_index + 1, "skipping actor pair that is not valid UTF-8");
            continue;
        };
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        match (fields.next(), fields.next()) {
            (Some(first), Some(second)) => pairs.push(ActorPair {
                first: first.to_string(),
                second: second.to_string(),
            }),
            _ => warn!(line = line_index + 1, "skipping malformed actor pair"),
        }
    }

    Ok(pairs)
}
