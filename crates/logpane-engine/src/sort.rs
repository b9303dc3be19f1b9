use std::sync::Arc;

use logpane_types::{LogRow, SortOrder};

/// Order rows chronologically. The sort is stable in both directions, so
/// rows with equal timestamps keep their original relative order.
pub fn sort_rows(rows: &[LogRow], order: SortOrder) -> Vec<LogRow> {
    let mut sorted = rows.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortOrder::Descending => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
    }
    sorted
}

/// Single-slot cache over [`sort_rows`], keyed on `Arc` identity of the
/// input plus the requested order. Re-render passes with unchanged inputs
/// get the previous allocation back.
#[derive(Debug, Default)]
pub struct SortCache {
    last: Option<(Arc<Vec<LogRow>>, SortOrder, Arc<Vec<LogRow>>)>,
}

impl SortCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&mut self, rows: &Arc<Vec<LogRow>>, order: SortOrder) -> Arc<Vec<LogRow>> {
        if let Some((cached_rows, cached_order, result)) = &self.last {
            if Arc::ptr_eq(cached_rows, rows) && *cached_order == order {
                return Arc::clone(result);
            }
        }

        let result = Arc::new(sort_rows(rows, order));
        self.last = Some((Arc::clone(rows), order, Arc::clone(&result)));
        result
    }
}
