//! Plain-text transaction datasets: one transaction per line, items separated
//! by whitespace.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum DatasetError {
    Io { path: PathBuf, source: io::Error },
    Read { line: usize, source: io::Error },
    InvalidNumber { line: usize, token: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "file not found or unable to read data: {}: {}", path.display(), source)
            }
            DatasetError::Read { line, source } => {
                write!(f, "unable to read line {}: {}", line, source)
            }
            DatasetError::InvalidNumber { line, token } => {
                write!(f, "line {}: '{}' is not an integer item", line, token)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } | DatasetError::Read { source, .. } => Some(source),
            DatasetError::InvalidNumber { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Text(Vec<Vec<String>>),
    Numeric(Vec<Vec<i64>>),
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Dataset::Text(transactions) => transactions.len(),
            Dataset::Numeric(transactions) => transactions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tokenizes every line. Repeated tokens within a line are kept once, at
/// their first position.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>, DatasetError> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| -> Result<Vec<String>, DatasetError> {
            let line = line.map_err(|source| DatasetError::Read {
                line: idx + 1,
                source,
            })?;
            let mut seen = HashSet::new();
            let items: Vec<String> = line
                .split_whitespace()
                .filter(|token| seen.insert(*token))
                .map(str::to_owned)
                .collect();
            Ok(items)
        })
        .collect()
}

pub fn parse_numeric(raw: &[Vec<String>]) -> Result<Vec<Vec<i64>>, DatasetError> {
    raw.iter()
        .enumerate()
        .map(|(idx, transaction)| -> Result<Vec<i64>, DatasetError> {
            let mut items: Vec<i64> = Vec::with_capacity(transaction.len());
            for token in transaction {
                let item = token.parse().map_err(|_| DatasetError::InvalidNumber {
                    line: idx + 1,
                    token: token.clone(),
                })?;
                // "1" and "01" collapse to the same item
                if !items.contains(&item) {
                    items.push(item);
                }
            }
            Ok(items)
        })
        .collect()
}

pub fn load(path: impl AsRef<Path>, numeric: bool) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = read_transactions(BufReader::new(file))?;

    if numeric {
        Ok(Dataset::Numeric(parse_numeric(&raw)?))
    } else {
        Ok(Dataset::Text(raw))
    }
}
