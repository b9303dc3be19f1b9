use std::fmt;
use std::sync::Arc;

use logpane_types::LogRow;

/// Callback taking a selected text value plus an optional query ref id
pub type ValueCallback = Arc<dyn Fn(&str, Option<&str>) + Send + Sync>;

/// Callback taking the row the interaction targets
pub type RowCallback = Arc<dyn Fn(&LogRow) + Send + Sync>;

/// Per-row interaction callbacks supplied by the caller and threaded
/// through to the row renderer unmodified. All optional; the popover
/// feature additionally requires at least one of the two value filters.
#[derive(Clone, Default)]
pub struct RowInteractions {
    pub on_click_filter_value: Option<ValueCallback>,
    pub on_click_filter_out_value: Option<ValueCallback>,
    pub on_pin_line: Option<RowCallback>,
    pub on_unpin_line: Option<RowCallback>,
    pub on_open_context: Option<RowCallback>,
    pub on_permalink_click: Option<RowCallback>,
}

impl RowInteractions {
    pub fn has_value_filter(&self) -> bool {
        self.on_click_filter_value.is_some() || self.on_click_filter_out_value.is_some()
    }
}

impl fmt::Debug for RowInteractions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowInteractions")
            .field("on_click_filter_value", &self.on_click_filter_value.is_some())
            .field(
                "on_click_filter_out_value",
                &self.on_click_filter_out_value.is_some(),
            )
            .field("on_pin_line", &self.on_pin_line.is_some())
            .field("on_unpin_line", &self.on_unpin_line.is_some())
            .field("on_open_context", &self.on_open_context.is_some())
            .field("on_permalink_click", &self.on_permalink_click.is_some())
            .finish()
    }
}
