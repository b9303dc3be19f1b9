use log::debug;

use logpane_types::LogRow;

use crate::interactions::RowInteractions;

/// Document-level dismissal events the controller listens for while a
/// selection is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalListener {
    Click,
    ContextMenu,
}

/// Host-side registry for global listeners, implemented by the embedding
/// shell. Registration and deregistration are driven by the controller
/// and always arrive in exactly-matched pairs.
pub trait ListenerHost {
    fn add_listener(&mut self, listener: GlobalListener);
    fn remove_listener(&mut self, listener: GlobalListener);
}

/// Popover feature switch, off unless the embedding surface opts in
#[derive(Debug, Clone, Copy, Default)]
pub struct PopoverConfig {
    pub menu_enabled: bool,
}

/// An active text selection anchored to one row, with coordinates relative
/// to the row container
#[derive(Debug, Clone)]
pub struct PopoverSession {
    pub selection: String,
    pub row: LogRow,
    pub x: f64,
    pub y: f64,
}

/// Pointer-up captured over a row. `selection` carries whatever text the
/// host reports as currently selected, if any.
#[derive(Debug, Clone)]
pub struct SelectionEvent {
    pub selection: Option<String>,
    pub x: f64,
    pub y: f64,
}

/// A document-level click or context-menu observed while a session is open
#[derive(Debug, Clone, Copy)]
pub struct DismissEvent {
    /// Whether the event target sits inside the row container
    pub target_in_rows: bool,
    /// Whether the host still reports a non-empty selection
    pub selection_active: bool,
}

/// Tracks the text-selection popover session and keeps the two global
/// listeners exactly paired across open, close, and unmount.
#[derive(Debug)]
pub struct SelectionController {
    config: PopoverConfig,
    session: Option<PopoverSession>,
    listeners_registered: bool,
}

impl SelectionController {
    pub fn new(config: PopoverConfig) -> Self {
        Self {
            config,
            session: None,
            listeners_registered: false,
        }
    }

    /// True when the popover may open: the feature switch is on and at
    /// least one value-filter callback is wired
    pub fn popover_supported(&self, interactions: &RowInteractions) -> bool {
        self.config.menu_enabled && interactions.has_value_filter()
    }

    /// Handle a pointer-up over `row`. Returns false when any entry guard
    /// fails, signalling that default text-selection handling should
    /// proceed uninterrupted.
    pub fn handle_selection(
        &mut self,
        host: &mut dyn ListenerHost,
        interactions: &RowInteractions,
        row: &LogRow,
        event: &SelectionEvent,
    ) -> bool {
        if !self.popover_supported(interactions) {
            return false;
        }
        let Some(selection) = event.selection.as_deref().filter(|s| !s.is_empty()) else {
            return false;
        };

        self.session = Some(PopoverSession {
            selection: selection.to_string(),
            row: row.clone(),
            x: event.x,
            y: event.y,
        });
        self.register_listeners(host);
        true
    }

    /// Handle a document-level click or context-menu while a session is open
    pub fn handle_deselection(&mut self, host: &mut dyn ListenerHost, event: &DismissEvent) {
        if !event.target_in_rows {
            // The event came from outside the row container, close the menu
            self.close(host);
            return;
        }
        if event.selection_active {
            return;
        }
        self.close(host);
    }

    /// Close the session and release both listeners
    pub fn close(&mut self, host: &mut dyn ListenerHost) {
        self.unregister_listeners(host);
        self.session = None;
    }

    /// Teardown path; safe when no session is active
    pub fn unmount(&mut self, host: &mut dyn ListenerHost) {
        self.close(host);
    }

    pub fn session(&self) -> Option<&PopoverSession> {
        self.session.as_ref()
    }

    fn register_listeners(&mut self, host: &mut dyn ListenerHost) {
        // Idempotent: rapid re-selections must not double-register
        if self.listeners_registered {
            return;
        }
        host.add_listener(GlobalListener::Click);
        host.add_listener(GlobalListener::ContextMenu);
        self.listeners_registered = true;
        debug!("selection listeners registered");
    }

    fn unregister_listeners(&mut self, host: &mut dyn ListenerHost) {
        if !self.listeners_registered {
            return;
        }
        host.remove_listener(GlobalListener::Click);
        host.remove_listener(GlobalListener::ContextMenu);
        self.listeners_registered = false;
        debug!("selection listeners removed");
    }
}
