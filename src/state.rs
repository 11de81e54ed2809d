//! Mutable runtime flags, separate from the immutable [`crate::config::Config`].

#[derive(Debug, Clone, Copy)]
pub struct RuntimeState {
    cursor_visible: bool,
    cursor_dirty: bool,
    params_available: bool,
}

impl RuntimeState {
    pub fn new(cursor_visible: bool) -> Self {
        Self {
            cursor_visible,
            // initial visibility still has to reach the host
            cursor_dirty: true,
            params_available: false,
        }
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        if self.cursor_visible == visible {
            return;
        }
        self.cursor_visible = visible;
        self.cursor_dirty = true;
    }

    pub fn toggle_cursor_visible(&mut self) {
        let visible = !self.cursor_visible;
        self.set_cursor_visible(visible);
    }

    /// Returns the pending cursor visibility once per change, for flushing to
    /// the host.
    pub fn take_cursor_change(&mut self) -> Option<bool> {
        if self.cursor_dirty {
            self.cursor_dirty = false;
            Some(self.cursor_visible)
        } else {
            None
        }
    }

    /// Whether the parameter window still exists on the host. Cleared
    /// synchronously when the window closes.
    pub fn params_available(&self) -> bool {
        self.params_available
    }

    pub fn set_params_available(&mut self, available: bool) {
        self.params_available = available;
    }
}
