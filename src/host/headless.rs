//! A recording, display-configurable host for tests and offline inspection.

use std::collections::BTreeSet;
use std::io;

use crate::geometry::{Display, Vec2};
use crate::host::{RenderContext, WindowHost};

pub type WindowId = u32;

const DEFAULT_WINDOW_ID: WindowId = 0;

/// Every host call the shell makes, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    CreateWindow(WindowId),
    SetPosition(WindowId, Vec2),
    SetSize(WindowId, Vec2),
    SetBorderless(WindowId),
    EnterFullscreen(WindowId),
    Show(WindowId),
    Hide(WindowId),
    SetCursorVisible(bool),
    RequestQuit,
}

/// In-memory [`WindowHost`] with a configurable display set.
///
/// Window ids are handed out sequentially, with id 0 reserved for the
/// pre-existing default window.
#[derive(Debug)]
pub struct HeadlessHost {
    displays: Vec<Display>,
    next_id: WindowId,
    hidden: BTreeSet<WindowId>,
    ops: Vec<HostOp>,
    quit_requested: bool,
}

impl HeadlessHost {
    pub fn new(displays: Vec<Display>) -> Self {
        Self {
            displays,
            next_id: DEFAULT_WINDOW_ID + 1,
            hidden: BTreeSet::new(),
            ops: Vec::new(),
            quit_requested: false,
        }
    }

    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Ids of all windows handed out so far, default window included.
    pub fn window_count(&self) -> usize {
        self.next_id as usize
    }
}

impl WindowHost for HeadlessHost {
    type WindowId = WindowId;

    fn displays(&mut self) -> Vec<Display> {
        self.displays.clone()
    }

    fn default_window(&mut self) -> WindowId {
        DEFAULT_WINDOW_ID
    }

    fn create_window(&mut self) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        self.ops.push(HostOp::CreateWindow(id));
        id
    }

    fn set_position(&mut self, window: WindowId, pos: Vec2) {
        self.ops.push(HostOp::SetPosition(window, pos));
    }

    fn set_size(&mut self, window: WindowId, size: Vec2) {
        self.ops.push(HostOp::SetSize(window, size));
    }

    fn set_borderless(&mut self, window: WindowId) {
        self.ops.push(HostOp::SetBorderless(window));
    }

    fn enter_fullscreen(&mut self, window: WindowId) {
        self.ops.push(HostOp::EnterFullscreen(window));
    }

    fn show(&mut self, window: WindowId) {
        self.hidden.remove(&window);
        self.ops.push(HostOp::Show(window));
    }

    fn hide(&mut self, window: WindowId) {
        self.hidden.insert(window);
        self.ops.push(HostOp::Hide(window));
    }

    fn is_hidden(&mut self, window: WindowId) -> bool {
        self.hidden.contains(&window)
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.ops.push(HostOp::SetCursorVisible(visible));
    }

    fn request_quit(&mut self) {
        self.quit_requested = true;
        self.ops.push(HostOp::RequestQuit);
    }

    fn load_asset(&mut self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(name)
    }
}

/// A [`RenderContext`] that records the draw commands it receives.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Clear,
    PushTransform,
    PopTransform,
    Scale(f32),
    Translate(Vec2),
    DrawText(String, Vec2),
}

#[derive(Debug, Default)]
pub struct HeadlessRender {
    ops: Vec<RenderOp>,
}

impl HeadlessRender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl RenderContext for HeadlessRender {
    fn clear(&mut self) {
        self.ops.push(RenderOp::Clear);
    }

    fn push_transform(&mut self) {
        self.ops.push(RenderOp::PushTransform);
    }

    fn pop_transform(&mut self) {
        self.ops.push(RenderOp::PopTransform);
    }

    fn scale(&mut self, factor: f32) {
        self.ops.push(RenderOp::Scale(factor));
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(RenderOp::Translate(offset));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        self.ops.push(RenderOp::DrawText(text.to_string(), pos));
    }
}
