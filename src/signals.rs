//! Typed event channels with synchronous, registration-order fan-out.
//!
//! Reentrancy rule: [`Signal::emit`] borrows the listener list mutably, so a
//! listener can never subscribe to or emit on the channel it is being called
//! from; the borrow checker enforces this statically. A panicking listener
//! unwinds out of `emit` and aborts the current frame — listeners are not
//! isolated from each other.

use crate::events::{FileDropEvent, KeyEvent, MouseEvent};

type Listener<T> = Box<dyn FnMut(&T)>;

/// One named event channel. Listeners are invoked in registration order.
pub struct Signal<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T> Signal<T> {
    pub fn connect(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, arg: &T) {
        for listener in &mut self.listeners {
            listener(arg);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The application-lifetime set of event channels.
///
/// `update`, `draw` and the pre/post transform hooks fire once per frame per
/// their fixed call sites in the shell; input channels fire once per host
/// event; `cleanup` fires once at shutdown.
#[derive(Debug, Default)]
pub struct SignalBus {
    pub update: Signal<()>,
    pub draw: Signal<()>,
    pub pre_draw_transform: Signal<()>,
    pub post_draw_transform: Signal<()>,
    pub key_down: Signal<KeyEvent>,
    pub key_up: Signal<KeyEvent>,
    pub mouse_down: Signal<MouseEvent>,
    pub mouse_up: Signal<MouseEvent>,
    pub mouse_move: Signal<MouseEvent>,
    pub mouse_drag: Signal<MouseEvent>,
    pub mouse_wheel: Signal<MouseEvent>,
    pub file_drop: Signal<FileDropEvent>,
    pub cleanup: Signal<()>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }
}
