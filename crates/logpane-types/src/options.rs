use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::row::LogRow;

/// Chronological ordering of rows. "No reordering" is expressed as
/// `Option<SortOrder>::None` at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortOrder::Ascending),
            "descending" => Ok(SortOrder::Descending),
            other => Err(Error::InvalidSortOrder(other.to_string())),
        }
    }
}

/// Policy used by the upstream dedup pass to collapse repeated log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupStrategy {
    #[default]
    None,
    /// Entries are identical
    Exact,
    /// Entries are identical once decimal digits are removed
    Numbers,
    /// Entries are identical once word characters are removed
    Signature,
}

impl fmt::Display for DedupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupStrategy::None => write!(f, "none"),
            DedupStrategy::Exact => write!(f, "exact"),
            DedupStrategy::Numbers => write!(f, "numbers"),
            DedupStrategy::Signature => write!(f, "signature"),
        }
    }
}

impl FromStr for DedupStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DedupStrategy::None),
            "exact" => Ok(DedupStrategy::Exact),
            "numbers" => Ok(DedupStrategy::Numbers),
            "signature" => Ok(DedupStrategy::Signature),
            other => Err(Error::InvalidDedupStrategy(other.to_string())),
        }
    }
}

/// Whether the similarity filter keeps rows similar to the reference
/// (`Show`) or drops them (`Hide`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMode {
    Show,
    Hide,
}

impl fmt::Display for SimilarityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityMode::Show => write!(f, "show"),
            SimilarityMode::Hide => write!(f, "hide"),
        }
    }
}

impl FromStr for SimilarityMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(SimilarityMode::Show),
            "hide" => Ok(SimilarityMode::Hide),
            other => Err(Error::InvalidSimilarityMode(other.to_string())),
        }
    }
}

/// Pinned reference row plus the filter mode applied against it.
/// The reference row need not be present in the row set being filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilaritySetting {
    pub row: LogRow,
    pub mode: SimilarityMode,
}
