//! Application shell: wires configuration, layout resolution, the window
//! registry and the signal bus to a concrete [`WindowHost`].
//!
//! The host drives everything; the shell only reacts. Per-frame work enters
//! through [`AppShell::update`] and [`AppShell::draw`], input through the
//! `key_*`/`mouse_*`/`file_drop` handlers (or [`AppShell::dispatch`] when the
//! host goes through [`crate::event_loop`]), and shutdown through
//! [`AppShell::cleanup`]. Everything runs synchronously on the host's main
//! thread.

use crate::config::{Config, ConfigError};
use crate::constants::{PARAMS_OVERLAY_MARGIN, PARAMS_WINDOW_SIZE};
use crate::diagnostics::FrameRateTracker;
use crate::event_loop::{ControlFlow, HostEvent};
use crate::events::{FileDropEvent, KeyEvent, MouseEvent};
use crate::geometry::Vec2;
use crate::host::{RenderContext, WindowHost};
use crate::keybindings::{Action, KeyBindings};
use crate::layout::{self, WindowRecord};
use crate::registry::WindowRegistry;
use crate::signals::SignalBus;
use crate::state::RuntimeState;

/// Explicitly constructed application context: configuration, signal bus,
/// window registry and runtime state, owned together and passed where needed
/// instead of living in globals.
#[derive(Debug)]
pub struct Context<W: Copy + Eq + Ord> {
    pub config: Config,
    pub signals: SignalBus,
    pub registry: WindowRegistry<W>,
    pub state: RuntimeState,
    pub frame_rate: FrameRateTracker,
}

impl<W: Copy + Eq + Ord + std::fmt::Debug> Context<W> {
    pub fn new(config: Config) -> Self {
        let state = RuntimeState::new(config.show_cursor);
        Self {
            config,
            signals: SignalBus::new(),
            registry: WindowRegistry::new(),
            state,
            frame_rate: FrameRateTracker::new(),
        }
    }
}

#[derive(Debug)]
pub struct AppShell<H: WindowHost> {
    pub ctx: Context<H::WindowId>,
    bindings: KeyBindings,
    params_window: Option<H::WindowId>,
    cleaned_up: bool,
}

impl<H: WindowHost> AppShell<H> {
    pub fn new(config: Config) -> Self {
        Self {
            ctx: Context::new(config),
            bindings: KeyBindings::default(),
            params_window: None,
            cleaned_up: false,
        }
    }

    /// Load, parse and validate the named config asset through the host.
    ///
    /// Initialization failures are logged with full context and returned;
    /// the caller aborts startup and no window set is created.
    pub fn from_asset(host: &mut H, name: &str) -> Result<Self, ConfigError> {
        let bytes = host.load_asset(name).map_err(|err| {
            tracing::error!(asset = name, %err, "could not load config asset");
            ConfigError::Load(err)
        })?;
        let config = Config::from_json_bytes(&bytes).map_err(|err| {
            tracing::error!(asset = name, %err, "could not parse config asset");
            err
        })?;
        Ok(Self::new(config))
    }

    /// The host window currently showing the debug overlay, if it still
    /// exists.
    pub fn params_window(&self) -> Option<H::WindowId> {
        self.params_window
    }

    /// Realize the configured layout on the host.
    ///
    /// The first resolved window reuses the host's default window (it has
    /// different lifecycle ownership than created ones); every later window
    /// is freshly created. The parameter window is always created last,
    /// outside the layout modes.
    pub fn initialize(&mut self, host: &mut H) {
        self.flush_cursor(host);

        let displays = host.displays();
        let plans = layout::resolve(
            &self.ctx.config.layout,
            &displays,
            self.ctx.config.app_scale,
            self.ctx.config.fullscreen,
        );
        tracing::info!(
            mode = ?self.ctx.config.layout.mode(),
            windows = plans.len(),
            displays = displays.len(),
            "resolved window layout"
        );
        for (i, plan) in plans.iter().enumerate() {
            let window = if i == 0 {
                host.default_window()
            } else {
                host.create_window()
            };
            host.set_borderless(window);
            host.set_position(window, plan.position);
            host.set_size(window, plan.size);
            if plan.fullscreen {
                host.enter_fullscreen(window);
            }
            tracing::debug!(?window, record = ?plan.record, "window placed");
            self.ctx.registry.attach(window, plan.record);
        }

        let params = host.create_window();
        host.set_size(params, PARAMS_WINDOW_SIZE);
        host.set_position(params, self.ctx.config.params_position);
        self.ctx.registry.attach(params, WindowRecord::params());
        if !self.ctx.config.show_params {
            host.hide(params);
        }
        self.params_window = Some(params);
        self.ctx.state.set_params_available(true);
    }

    /// Per-frame update: sample the frame rate, then fan out `update`.
    pub fn update(&mut self) {
        self.ctx.frame_rate.tick();
        self.ctx.signals.update.emit(&());
    }

    /// Draw whichever window the host is currently rendering.
    ///
    /// Parameter window: clear plus debug overlay only. Window with a
    /// record: clear, pre-transform hook, scaled and translated draw,
    /// post-transform hook. Unrecognized window: clear and untransformed
    /// draw.
    pub fn draw<R: RenderContext>(&mut self, window: H::WindowId, render: &mut R) {
        render.clear();
        if Some(window) == self.params_window {
            self.draw_params_overlay(render);
            return;
        }
        match self.ctx.registry.lookup(window) {
            Some(record) => {
                self.ctx.signals.pre_draw_transform.emit(&());
                render.push_transform();
                render.scale(self.ctx.config.app_scale);
                render.translate(record.translation);
                self.ctx.signals.draw.emit(&());
                render.pop_transform();
                self.ctx.signals.post_draw_transform.emit(&());
            }
            None => self.ctx.signals.draw.emit(&()),
        }
    }

    fn draw_params_overlay<R: RenderContext>(&mut self, render: &mut R) {
        let margin = PARAMS_OVERLAY_MARGIN;
        render.draw_text("Debug Params", Vec2::new(margin, margin));
        render.draw_text(
            &format!("FPS: {:.1}", self.ctx.frame_rate.average_fps()),
            Vec2::new(margin, margin * 2.0),
        );
    }

    /// Key press: run the default handlers when enabled, then forward to the
    /// `key_down` channel unconditionally.
    pub fn key_down(&mut self, host: &mut H, key: KeyEvent) {
        if self.ctx.config.default_key_handlers {
            match self.bindings.action_for_key(&key) {
                Some(Action::Quit) => host.request_quit(),
                Some(Action::ToggleCursor) => {
                    self.ctx.state.toggle_cursor_visible();
                    self.flush_cursor(host);
                }
                Some(Action::ToggleParams) => self.toggle_params(host),
                None => {}
            }
        }
        self.ctx.signals.key_down.emit(&key);
    }

    pub fn key_up(&mut self, key: KeyEvent) {
        self.ctx.signals.key_up.emit(&key);
    }

    pub fn mouse_down(&mut self, event: MouseEvent) {
        self.ctx.signals.mouse_down.emit(&event);
    }

    pub fn mouse_up(&mut self, event: MouseEvent) {
        self.ctx.signals.mouse_up.emit(&event);
    }

    pub fn mouse_move(&mut self, event: MouseEvent) {
        self.ctx.signals.mouse_move.emit(&event);
    }

    pub fn mouse_drag(&mut self, event: MouseEvent) {
        self.ctx.signals.mouse_drag.emit(&event);
    }

    pub fn mouse_wheel(&mut self, event: MouseEvent) {
        self.ctx.signals.mouse_wheel.emit(&event);
    }

    pub fn file_drop(&mut self, event: FileDropEvent) {
        self.ctx.signals.file_drop.emit(&event);
    }

    /// Host notification that a window was destroyed. Synchronously
    /// invalidates the parameter-window availability flag and drops the
    /// window's record.
    pub fn window_closed(&mut self, window: H::WindowId) {
        if Some(window) == self.params_window {
            self.ctx.state.set_params_available(false);
            self.params_window = None;
        }
        self.ctx.registry.detach(window);
    }

    /// Emits the `cleanup` channel exactly once, then defers to host
    /// shutdown.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        self.ctx.signals.cleanup.emit(&());
    }

    /// Route one [`HostEvent`] to its handler. For hosts pumping through
    /// [`crate::event_loop::EventLoop`].
    pub fn dispatch(&mut self, host: &mut H, event: HostEvent<H::WindowId>) -> ControlFlow {
        match event {
            HostEvent::KeyDown(key) => self.key_down(host, key),
            HostEvent::KeyUp(key) => self.key_up(key),
            HostEvent::MouseDown(e) => self.mouse_down(e),
            HostEvent::MouseUp(e) => self.mouse_up(e),
            HostEvent::MouseMove(e) => self.mouse_move(e),
            HostEvent::MouseDrag(e) => self.mouse_drag(e),
            HostEvent::MouseWheel(e) => self.mouse_wheel(e),
            HostEvent::FileDrop(e) => self.file_drop(e),
            HostEvent::WindowClosed(w) => self.window_closed(w),
            HostEvent::QuitRequested => {
                self.cleanup();
                return ControlFlow::Quit;
            }
        }
        ControlFlow::Continue
    }

    fn toggle_params(&mut self, host: &mut H) {
        // No-op once the window has been closed.
        if !self.ctx.state.params_available() {
            return;
        }
        let Some(params) = self.params_window else {
            return;
        };
        if host.is_hidden(params) {
            host.show(params);
        } else {
            host.hide(params);
        }
    }

    fn flush_cursor(&mut self, host: &mut H) {
        if let Some(visible) = self.ctx.state.take_cursor_change() {
            host.set_cursor_visible(visible);
        }
    }
}

/// Convenience for binaries: read a config from an explicit path, falling
/// back to the embedded default when `path` is `None`.
pub fn load_config(path: Option<&std::path::Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => Config::embedded_default(),
    }
}
