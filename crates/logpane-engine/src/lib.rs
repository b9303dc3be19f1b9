// Engine module - pure processing stages between log rows (types) and the view layer.
// Everything here is synchronous and allocation-only: no I/O, no timers.

pub mod dedup;
pub mod keys;
pub mod pipeline;
pub mod resolution;
pub mod similarity;
pub mod sort;

pub use dedup::{dedup_rows, is_duplicate_row, show_duplicates, total_duplicates};
pub use keys::UniqueKeyMaker;
pub use pipeline::{PipelineInput, RenderPipeline, RenderPlan, RenderRow};
pub use resolution::{calculate_stride, is_sampled, resolution_rounding};
pub use similarity::{
    SIMILARITY_THRESHOLD, SimilarityCache, filter_similarity, string_similarity,
};
pub use sort::{SortCache, sort_rows};

// Façade API - stable entry point for callers that do not need memoization
// across passes. Long-lived views should hold a RenderPipeline instead.

/// Build a render plan for one pass over an uncached pipeline.
pub fn plan_render(input: &PipelineInput) -> RenderPlan {
    RenderPipeline::new().plan(input)
}
