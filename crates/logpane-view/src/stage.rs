use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use log::debug;

use crate::timer::OneShotTimer;

/// Row count at or below 2x this limit renders in one shot
pub const PREVIEW_LIMIT: usize = 100;

/// Delay before the staged view finishes rendering everything
pub const RENDER_ALL_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct StagedRenderConfig {
    pub preview_limit: usize,
    pub render_all_delay: Duration,
}

impl Default for StagedRenderConfig {
    fn default() -> Self {
        Self {
            preview_limit: PREVIEW_LIMIT,
            render_all_delay: RENDER_ALL_DELAY,
        }
    }
}

/// Lifecycle of the staged-rendering gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// Not mounted yet
    Initial,
    /// Mounted with a large row set; full render pending
    PreviewOnly,
    /// Everything may render (terminal)
    RenderAll,
}

/// Decides whether a mounted view renders everything immediately or
/// progressively, to keep interaction responsive for large row sets.
///
/// Small row sets (at most twice the preview limit) go straight to
/// `RenderAll` with no timer. Larger sets enter `PreviewOnly` and flip to
/// `RenderAll` exactly once after a fixed delay; tearing the view down
/// first cancels the pending flip.
#[derive(Default)]
pub struct StagedRender {
    render_all: Arc<AtomicBool>,
    timer: Option<OneShotTimer>,
    mounted: bool,
}

impl StagedRender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, row_count: usize, config: &StagedRenderConfig) -> Result<()> {
        self.mounted = true;

        // Render all right away if not too far over the limit
        if row_count <= config.preview_limit * 2 {
            self.render_all.store(true, Ordering::Release);
            return Ok(());
        }

        debug!(
            "staged rendering of {} rows, full render in {:?}",
            row_count, config.render_all_delay
        );
        let flag = Arc::clone(&self.render_all);
        let timer = OneShotTimer::spawn("render-all", config.render_all_delay, move || {
            flag.store(true, Ordering::Release);
        })?;
        self.timer = Some(timer);
        Ok(())
    }

    /// Cancel any pending transition. Safe to call whether or not the
    /// timer already fired.
    pub fn unmount(&mut self) {
        self.timer = None;
        self.mounted = false;
    }

    pub fn render_all(&self) -> bool {
        self.render_all.load(Ordering::Acquire)
    }

    pub fn stage(&self) -> RenderStage {
        if self.render_all() {
            RenderStage::RenderAll
        } else if self.mounted {
            RenderStage::PreviewOnly
        } else {
            RenderStage::Initial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn fast_config() -> StagedRenderConfig {
        StagedRenderConfig {
            preview_limit: 100,
            render_all_delay: Duration::from_millis(50),
        }
    }

    #[test]
    fn test_small_row_set_renders_all_immediately() {
        let mut staged = StagedRender::new();
        assert_eq!(staged.stage(), RenderStage::Initial);

        staged.mount(150, &fast_config()).unwrap();
        assert_eq!(staged.stage(), RenderStage::RenderAll);
        // No timer was scheduled for the direct transition
        assert!(staged.timer.is_none());
    }

    #[test]
    fn test_boundary_is_twice_the_preview_limit() {
        let mut at_limit = StagedRender::new();
        at_limit.mount(200, &fast_config()).unwrap();
        assert_eq!(at_limit.stage(), RenderStage::RenderAll);

        let mut over_limit = StagedRender::new();
        over_limit.mount(201, &fast_config()).unwrap();
        assert_eq!(over_limit.stage(), RenderStage::PreviewOnly);
        over_limit.unmount();
    }

    #[test]
    fn test_large_row_set_transitions_after_delay() {
        let mut staged = StagedRender::new();
        staged.mount(500, &fast_config()).unwrap();
        assert_eq!(staged.stage(), RenderStage::PreviewOnly);
        assert!(!staged.render_all());

        thread::sleep(Duration::from_millis(200));
        assert_eq!(staged.stage(), RenderStage::RenderAll);
    }

    #[test]
    fn test_unmount_before_delay_cancels_transition() {
        let mut staged = StagedRender::new();
        let config = StagedRenderConfig {
            preview_limit: 100,
            render_all_delay: Duration::from_millis(100),
        };
        staged.mount(500, &config).unwrap();

        // Torn down well before the delay elapses
        staged.unmount();
        thread::sleep(Duration::from_millis(200));
        assert!(!staged.render_all());
        assert_eq!(staged.stage(), RenderStage::Initial);
    }
}
