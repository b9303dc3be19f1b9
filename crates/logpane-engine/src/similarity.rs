use std::collections::HashMap;
use std::sync::Arc;

use logpane_types::{LogRow, SimilarityMode, SimilaritySetting};

/// Scores strictly above the threshold count as "similar"; the boundary
/// itself belongs to the dissimilar side.
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Case-insensitive bigram Sørensen–Dice coefficient between two strings,
/// in 0.0..=1.0. Strings shorter than one bigram score 0 against anything,
/// including themselves.
pub fn string_similarity(first: &str, second: &str) -> f64 {
    let first: Vec<char> = first.to_lowercase().chars().collect();
    let second: Vec<char> = second.to_lowercase().chars().collect();
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    // Multiset intersection: each bigram occurrence in `first` can match
    // at most one occurrence in `second`.
    let mut bigrams: HashMap<(char, char), u32> = HashMap::new();
    for pair in first.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut matches: u32 = 0;
    for pair in second.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }

    (matches as f64 * 2.0) / ((first.len() + second.len() - 2) as f64)
}

/// Filter rows against a pinned reference row, preserving relative order.
/// `Show` keeps rows scoring above the threshold; `Hide` keeps the rest.
pub fn filter_similarity(rows: &[LogRow], setting: &SimilaritySetting) -> Vec<LogRow> {
    rows.iter()
        .filter(|row| {
            let score = string_similarity(&setting.row.entry, &row.entry);
            match setting.mode {
                SimilarityMode::Hide => score <= SIMILARITY_THRESHOLD,
                SimilarityMode::Show => score > SIMILARITY_THRESHOLD,
            }
        })
        .cloned()
        .collect()
}

/// Single-slot cache over [`filter_similarity`].
///
/// Scoring is O(rows × entry length), so re-render passes with an unchanged
/// row set and setting must not recompute. The row set is keyed by `Arc`
/// identity, the setting by reference-row uid plus mode.
#[derive(Debug, Default)]
pub struct SimilarityCache {
    last: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    rows: Arc<Vec<LogRow>>,
    reference_uid: String,
    mode: SimilarityMode,
    result: Arc<Vec<LogRow>>,
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(
        &mut self,
        rows: &Arc<Vec<LogRow>>,
        setting: &SimilaritySetting,
    ) -> Arc<Vec<LogRow>> {
        if let Some(entry) = &self.last {
            if Arc::ptr_eq(&entry.rows, rows)
                && entry.reference_uid == setting.row.uid
                && entry.mode == setting.mode
            {
                return Arc::clone(&entry.result);
            }
        }

        let result = Arc::new(filter_similarity(rows, setting));
        self.last = Some(CacheEntry {
            rows: Arc::clone(rows),
            reference_uid: setting.row.uid.clone(),
            mode: setting.mode,
            result: Arc::clone(&result),
        });
        result
    }
}
