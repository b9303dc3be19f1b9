use anyhow::Result;

use logpane_engine::{PipelineInput, RenderPipeline, RenderPlan};
use logpane_types::LogRow;

use crate::interactions::RowInteractions;
use crate::selection::{
    DismissEvent, ListenerHost, PopoverConfig, PopoverSession, SelectionController, SelectionEvent,
};
use crate::stage::{RenderStage, StagedRender, StagedRenderConfig};

/// Everything the external row renderer gets for one row
#[derive(Debug)]
pub struct RowContext<'a> {
    pub row: &'a LogRow,
    pub key: &'a str,
    /// Whether the duplicate-count badge should be drawn
    pub show_duplicates: bool,
    /// Whether expensive per-row work may run (staged rendering finished)
    pub render_all: bool,
}

/// External collaborator that draws one row
pub trait RowRenderer {
    fn render_row(&mut self, ctx: RowContext<'_>);
}

/// View-level facade pairing the pure pipeline with mount/unmount
/// lifecycle state. One instance per on-screen log view.
pub struct LogRowsView {
    pipeline: RenderPipeline,
    staged: StagedRender,
    selection: SelectionController,
    interactions: RowInteractions,
    stage_config: StagedRenderConfig,
}

impl LogRowsView {
    pub fn new(popover: PopoverConfig, interactions: RowInteractions) -> Self {
        Self {
            pipeline: RenderPipeline::new(),
            staged: StagedRender::new(),
            selection: SelectionController::new(popover),
            interactions,
            stage_config: StagedRenderConfig::default(),
        }
    }

    pub fn with_stage_config(mut self, config: StagedRenderConfig) -> Self {
        self.stage_config = config;
        self
    }

    /// Mount with the incoming raw row count; decides whether rendering
    /// is staged.
    pub fn mount(&mut self, row_count: usize) -> Result<()> {
        let config = self.stage_config.clone();
        self.staged.mount(row_count, &config)
    }

    /// Tear the view down: cancel any pending render-all transition and
    /// release the selection listeners.
    pub fn unmount(&mut self, host: &mut dyn ListenerHost) {
        self.selection.unmount(host);
        self.staged.unmount();
    }

    /// Run one render pass: build the plan and hand each surviving row to
    /// the external renderer together with the pass-level flags.
    pub fn render_pass(
        &mut self,
        input: &PipelineInput,
        renderer: &mut dyn RowRenderer,
    ) -> RenderPlan {
        let plan = self.pipeline.plan(input);
        let render_all = self.staged.render_all();

        for render_row in &plan.rows {
            renderer.render_row(RowContext {
                row: &render_row.row,
                key: &render_row.key,
                show_duplicates: plan.show_duplicates,
                render_all,
            });
        }
        plan
    }

    pub fn stage(&self) -> RenderStage {
        self.staged.stage()
    }

    /// The active popover session, for the external popover component
    pub fn popover_session(&self) -> Option<&PopoverSession> {
        self.selection.session()
    }

    pub fn handle_selection(
        &mut self,
        host: &mut dyn ListenerHost,
        row: &LogRow,
        event: &SelectionEvent,
    ) -> bool {
        self.selection
            .handle_selection(host, &self.interactions, row, event)
    }

    pub fn handle_deselection(&mut self, host: &mut dyn ListenerHost, event: &DismissEvent) {
        self.selection.handle_deselection(host, event)
    }

    pub fn close_popover(&mut self, host: &mut dyn ListenerHost) {
        self.selection.close(host)
    }
}
