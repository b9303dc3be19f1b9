use std::sync::Arc;

use serde::{Deserialize, Serialize};

use logpane_types::{DedupStrategy, LogRow, SimilaritySetting, SortOrder};

use crate::dedup::{show_duplicates, total_duplicates};
use crate::keys::UniqueKeyMaker;
use crate::resolution::{calculate_stride, is_sampled};
use crate::similarity::SimilarityCache;
use crate::sort::SortCache;

/// Inputs for one render pass.
///
/// `rows` is the raw fetched sequence; `deduplicated_rows` is the output of
/// an upstream dedup pass over the same data, when one ran. The stride is
/// always computed from the raw count so that sampling density does not
/// shift as dedup or the similarity filter narrow the displayed set.
#[derive(Debug, Clone)]
pub struct PipelineInput {
    pub rows: Arc<Vec<LogRow>>,
    pub deduplicated_rows: Option<Arc<Vec<LogRow>>>,
    pub dedup_strategy: DedupStrategy,
    pub sort_order: Option<SortOrder>,
    pub resolution: Option<f64>,
    pub similarity: Option<SimilaritySetting>,
}

impl PipelineInput {
    pub fn new(rows: Arc<Vec<LogRow>>) -> Self {
        Self {
            rows,
            deduplicated_rows: None,
            dedup_strategy: DedupStrategy::None,
            sort_order: None,
            resolution: None,
            similarity: None,
        }
    }
}

/// One row selected for rendering, with its pass-unique key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRow {
    pub row: LogRow,
    pub key: String,
}

/// Ordered, filtered, sampled output of one render pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPlan {
    pub rows: Vec<RenderRow>,
    /// Whether the row renderer should draw duplicate-count badges
    pub show_duplicates: bool,
    /// Sampling stride the plan was built with
    pub stride: f64,
    /// Raw row count before filtering and sampling
    pub total_rows: usize,
}

impl RenderPlan {
    fn empty() -> Self {
        Self {
            rows: Vec::new(),
            show_duplicates: false,
            stride: 1.0,
            total_rows: 0,
        }
    }
}

/// Stateful pipeline front. Holds the memo caches for the sort and
/// similarity stages, so a long-lived view skips recomputation whenever a
/// pass repeats the previous inputs.
#[derive(Debug, Default)]
pub struct RenderPipeline {
    sort_cache: SortCache,
    similarity_cache: SimilarityCache,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan(&mut self, input: &PipelineInput) -> RenderPlan {
        if input.rows.is_empty() {
            return RenderPlan::empty();
        }

        let deduped = input
            .deduplicated_rows
            .as_ref()
            .unwrap_or(&input.rows);
        let deduped = match &input.similarity {
            Some(setting) => self.similarity_cache.filter(deduped, setting),
            None => Arc::clone(deduped),
        };

        // Counts are summed after the similarity filter narrows the set, so
        // the badge reflects only what is on screen.
        let dedup_count = total_duplicates(&deduped);
        let duplicates_visible = show_duplicates(input.dedup_strategy, dedup_count);

        let ordered = match input.sort_order {
            Some(order) => self.sort_cache.sort(&deduped, order),
            None => deduped,
        };

        let stride = calculate_stride(input.resolution, input.rows.len());

        let mut keys = UniqueKeyMaker::new();
        let rows = ordered
            .iter()
            .enumerate()
            .filter(|(index, _)| is_sampled(*index, stride))
            .map(|(_, row)| RenderRow {
                key: keys.get_key(&row.uid),
                row: row.clone(),
            })
            .collect();

        RenderPlan {
            rows,
            show_duplicates: duplicates_visible,
            stride,
            total_rows: input.rows.len(),
        }
    }
}
