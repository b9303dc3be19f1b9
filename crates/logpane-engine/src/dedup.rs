use std::sync::LazyLock;

use logpane_types::{DedupStrategy, LogRow};
use regex::Regex;

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Collapse consecutive duplicate rows into their first occurrence.
///
/// Survivors get an explicit duplicate count, starting at zero; each
/// following row that matches under the strategy bumps the count of the
/// previous survivor instead of being emitted. `DedupStrategy::None`
/// returns the input unchanged, with no counts attached.
pub fn dedup_rows(rows: &[LogRow], strategy: DedupStrategy) -> Vec<LogRow> {
    if strategy == DedupStrategy::None {
        return rows.to_vec();
    }

    let mut result: Vec<LogRow> = Vec::with_capacity(rows.len());
    for row in rows {
        match result.last_mut() {
            Some(previous) if is_duplicate_row(row, previous, strategy) => {
                previous.duplicates = Some(previous.duplicate_count() + 1);
            }
            _ => {
                let mut survivor = row.clone();
                survivor.duplicates = Some(0);
                result.push(survivor);
            }
        }
    }
    result
}

/// Row equality under a dedup strategy
pub fn is_duplicate_row(row: &LogRow, other: &LogRow, strategy: DedupStrategy) -> bool {
    match strategy {
        DedupStrategy::None => false,
        DedupStrategy::Exact => row.entry == other.entry,
        DedupStrategy::Numbers => {
            DIGIT_RE.replace_all(&row.entry, "") == DIGIT_RE.replace_all(&other.entry, "")
        }
        DedupStrategy::Signature => {
            WORD_RE.replace_all(&row.entry, "") == WORD_RE.replace_all(&other.entry, "")
        }
    }
}

/// Total number of suppressed duplicates across a row set
pub fn total_duplicates(rows: &[LogRow]) -> u64 {
    rows.iter().map(|row| row.duplicate_count()).sum()
}

/// Whether the duplicate-count badge should be drawn at all. Advisory:
/// this never changes which rows render.
pub fn show_duplicates(strategy: DedupStrategy, total: u64) -> bool {
    strategy != DedupStrategy::None && total > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(uid: &str, entry: &str) -> LogRow {
        LogRow::new(uid, entry, Utc::now())
    }

    #[test]
    fn test_exact_collapses_consecutive_runs_only() {
        let rows = vec![
            row("a", "disk full"),
            row("b", "disk full"),
            row("c", "disk full"),
            row("d", "oom killed"),
            row("e", "disk full"),
        ];

        let deduped = dedup_rows(&rows, DedupStrategy::Exact);
        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped[0].uid, "a");
        assert_eq!(deduped[0].duplicates, Some(2));
        assert_eq!(deduped[1].duplicates, Some(0));
        // Non-consecutive repeat survives on its own
        assert_eq!(deduped[2].uid, "e");
        assert_eq!(deduped[2].duplicates, Some(0));
    }

    #[test]
    fn test_numbers_ignores_digits() {
        let rows = vec![
            row("a", "request 4531 timed out after 30s"),
            row("b", "request 9910 timed out after 12s"),
        ];

        let deduped = dedup_rows(&rows, DedupStrategy::Numbers);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].duplicates, Some(1));
    }

    #[test]
    fn test_signature_ignores_word_characters() {
        let rows = vec![
            row("a", "user=alice action=login"),
            row("b", "user=bob action=logout"),
            row("c", "a totally different : shape"),
        ];

        let deduped = dedup_rows(&rows, DedupStrategy::Signature);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].duplicates, Some(1));
    }

    #[test]
    fn test_none_passes_through_without_counts() {
        let rows = vec![row("a", "same"), row("b", "same")];
        let deduped = dedup_rows(&rows, DedupStrategy::None);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].duplicates, None);
    }

    #[test]
    fn test_show_duplicates_requires_strategy_and_count() {
        assert!(!show_duplicates(DedupStrategy::None, 5));
        assert!(!show_duplicates(DedupStrategy::Exact, 0));
        assert!(show_duplicates(DedupStrategy::Exact, 1));
    }

    #[test]
    fn test_total_treats_unset_as_zero() {
        let mut a = row("a", "x");
        a.duplicates = Some(3);
        let b = row("b", "y");
        assert_eq!(total_duplicates(&[a, b]), 3);
    }
}
