use std::io;
use std::time::Duration;

use crate::events::{FileDropEvent, KeyEvent, MouseEvent};

pub enum ControlFlow {
    Continue,
    Quit,
}

/// One event delivered by the host, tagged with the window it belongs to
/// where that matters.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent<W> {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    MouseDown(MouseEvent),
    MouseUp(MouseEvent),
    MouseMove(MouseEvent),
    MouseDrag(MouseEvent),
    MouseWheel(MouseEvent),
    FileDrop(FileDropEvent),
    WindowClosed(W),
    QuitRequested,
}

/// Source of host events, typically backed by the platform's event queue.
pub trait EventSource<W> {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<HostEvent<W>>;
}

impl<W, T: EventSource<W> + ?Sized> EventSource<W> for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<HostEvent<W>> {
        (**self).read()
    }
}

/// A centralized dispatch pump for hosts that surface a pollable event queue.
///
/// This owns the synchronous flow the shell expects: events are handed to the
/// handler one at a time, and a `None` tick fires once per poll interval for
/// the update/draw pass. Hosts with their own callback-driven loops can skip
/// this entirely and call the shell's handler methods directly; the per-event
/// and per-frame call sites are the same either way.
pub struct EventLoop<S> {
    source: S,
    poll_interval: Duration,
}

impl<S> EventLoop<S> {
    pub fn new(source: S, poll_interval: Duration) -> Self {
        Self {
            source,
            poll_interval,
        }
    }

    pub fn source(&mut self) -> &mut S {
        &mut self.source
    }

    /// Runs the dispatch loop, taking control of the current thread.
    ///
    /// The `handler` is called with:
    /// - `Some(event)` when a host event arrives.
    /// - `None` when the poll interval elapses without one (the frame tick).
    pub fn run<W, F>(&mut self, mut handler: F) -> io::Result<()>
    where
        S: EventSource<W>,
        F: FnMut(&mut S, Option<HostEvent<W>>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.source, None)? {
                break;
            }

            if self.source.poll(self.poll_interval)? {
                // Drain the queue so rendering doesn't fall behind bursts of
                // input (mouse drags especially).
                loop {
                    let event = self.source.read()?;
                    if let ControlFlow::Quit = handler(&mut self.source, Some(event))? {
                        return Ok(());
                    }
                    if !self.source.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
