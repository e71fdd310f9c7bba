use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiningError {
    InvalidMinSupport { value: usize },
    UnorderedItemset { previous: usize, next: usize },
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiningError::InvalidMinSupport { value } => {
                write!(f, "Minimum support must be a positive integer, got {}", value)
            }
            MiningError::UnorderedItemset { previous, next } => {
                write!(
                    f,
                    "Itemset is not in canonical order: rank {} followed by rank {}",
                    previous, next
                )
            }
        }
    }
}

impl std::error::Error for MiningError {}
