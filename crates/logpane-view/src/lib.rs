// View layer - stateful lifecycle around the pure engine pipeline.
// This is the only place with asynchrony: one cancelable timer per view.

pub mod interactions;
pub mod selection;
pub mod stage;
pub mod timer;
pub mod view;

pub use interactions::{RowCallback, RowInteractions, ValueCallback};
pub use selection::{
    DismissEvent, GlobalListener, ListenerHost, PopoverConfig, PopoverSession,
    SelectionController, SelectionEvent,
};
pub use stage::{PREVIEW_LIMIT, RENDER_ALL_DELAY, RenderStage, StagedRender, StagedRenderConfig};
pub use timer::OneShotTimer;
pub use view::{LogRowsView, RowContext, RowRenderer};
