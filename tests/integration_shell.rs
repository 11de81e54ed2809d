use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use indoc::indoc;

use multiwin::event_loop::{ControlFlow, HostEvent};
use multiwin::events::{FileDropEvent, MouseButton, MouseEvent};
use multiwin::geometry::Vec2;
use multiwin::host::headless::{HeadlessHost, HeadlessRender, HostOp, RenderOp};
use multiwin::host::WindowHost;
use multiwin::shell::AppShell;
use multiwin::Config;

fn grid_shell(rows: u32, cols: u32) -> (AppShell<HeadlessHost>, HeadlessHost) {
    let config = Config::from_json_str(&format!(
        r#"{{ "mode": "grid", "rows": {rows}, "cols": {cols} }}"#
    ))
    .unwrap();
    let mut host = HeadlessHost::new(Vec::new());
    let mut app = AppShell::new(config);
    app.initialize(&mut host);
    (app, host)
}

fn press(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, mods)
}

#[test]
fn grid_initialize_creates_content_windows_plus_params() {
    let (app, host) = grid_shell(2, 2);
    // default window + 3 created content windows + params window
    assert_eq!(host.window_count(), 5);
    assert_eq!(app.ctx.registry.len(), 5);
    let mut indices: Vec<i32> = app
        .ctx
        .registry
        .ids()
        .iter()
        .filter_map(|&id| app.ctx.registry.lookup(id))
        .map(|r| r.index)
        .collect();
    indices.sort();
    assert_eq!(indices, vec![-1, 0, 1, 2, 3]);
    // params window starts hidden under the default config
    let params = app.params_window().unwrap();
    assert!(host.ops().contains(&HostOp::Hide(params)));
}

#[test]
fn params_hotkey_toggles_until_window_closes() {
    let (mut app, mut host) = grid_shell(1, 1);
    let params = app.params_window().unwrap();
    assert!(host.is_hidden(params));

    app.key_down(&mut host, press(KeyCode::Char('p'), KeyModifiers::NONE));
    assert!(!host.is_hidden(params));
    app.key_down(&mut host, press(KeyCode::Char('p'), KeyModifiers::NONE));
    assert!(host.is_hidden(params));

    // closing the window makes the hotkey a no-op
    app.window_closed(params);
    assert!(app.params_window().is_none());
    let ops_before = host.ops().len();
    app.key_down(&mut host, press(KeyCode::Char('p'), KeyModifiers::NONE));
    let show_hide_after: Vec<_> = host.ops()[ops_before..]
        .iter()
        .filter(|op| matches!(op, HostOp::Show(_) | HostOp::Hide(_)))
        .collect();
    assert!(show_hide_after.is_empty());
}

#[test]
fn escape_requests_quit_and_ctrl_m_toggles_cursor() {
    let (mut app, mut host) = grid_shell(1, 1);
    // initial cursor visibility was flushed during initialize
    assert!(host.ops().contains(&HostOp::SetCursorVisible(true)));

    app.key_down(&mut host, press(KeyCode::Char('m'), KeyModifiers::CONTROL));
    assert!(host.ops().contains(&HostOp::SetCursorVisible(false)));
    assert!(!app.ctx.state.cursor_visible());

    app.key_down(&mut host, press(KeyCode::Esc, KeyModifiers::NONE));
    assert!(host.quit_requested());
}

#[test]
fn disabled_default_handlers_still_forward_keys() {
    let config = Config::from_json_str(indoc! {r#"
        {
            "mode": "grid",
            "default_key_handlers": false
        }
    "#})
    .unwrap();
    let mut host = HeadlessHost::new(Vec::new());
    let mut app = AppShell::new(config);
    app.initialize(&mut host);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    app.ctx
        .signals
        .key_down
        .connect(move |key| sink.borrow_mut().push(key.code));

    app.key_down(&mut host, press(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!host.quit_requested());
    assert_eq!(*seen.borrow(), vec![KeyCode::Esc]);
}

#[test]
fn content_window_draw_applies_scale_and_translation() {
    let config = Config::from_json_str(indoc! {r#"
        {
            "mode": "custom",
            "windows": [
                { "x": 0, "y": 0, "w": 800, "h": 600 },
                { "x": 800, "y": 0, "w": 800, "h": 600 }
            ],
            "app_scale": 2.0
        }
    "#})
    .unwrap();
    let mut host = HeadlessHost::new(Vec::new());
    let mut app = AppShell::new(config);
    app.initialize(&mut host);

    let hooks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&hooks);
    app.ctx
        .signals
        .pre_draw_transform
        .connect(move |_| sink.borrow_mut().push("pre"));
    let sink = Rc::clone(&hooks);
    app.ctx
        .signals
        .draw
        .connect(move |_| sink.borrow_mut().push("draw"));
    let sink = Rc::clone(&hooks);
    app.ctx
        .signals
        .post_draw_transform
        .connect(move |_| sink.borrow_mut().push("post"));

    // the second content window lives on host window id 1
    let mut render = HeadlessRender::new();
    app.draw(1, &mut render);
    assert_eq!(
        render.ops(),
        &[
            RenderOp::Clear,
            RenderOp::PushTransform,
            RenderOp::Scale(2.0),
            RenderOp::Translate(Vec2::new(-800.0, 0.0)),
            RenderOp::PopTransform,
        ]
    );
    assert_eq!(*hooks.borrow(), vec!["pre", "draw", "post"]);
}

#[test]
fn unrecognized_window_draws_untransformed() {
    let (mut app, _host) = grid_shell(1, 1);
    let draws = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&draws);
    app.ctx.signals.draw.connect(move |_| *sink.borrow_mut() += 1);

    let mut render = HeadlessRender::new();
    app.draw(99, &mut render);
    assert_eq!(render.ops(), &[RenderOp::Clear]);
    assert_eq!(*draws.borrow(), 1);
}

#[test]
fn params_window_draw_shows_overlay_only() {
    let (mut app, _host) = grid_shell(1, 1);
    let draws = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&draws);
    app.ctx.signals.draw.connect(move |_| *sink.borrow_mut() += 1);

    let params = app.params_window().unwrap();
    let mut render = HeadlessRender::new();
    app.draw(params, &mut render);
    // clear plus overlay text, no content draw fan-out
    assert_eq!(render.ops()[0], RenderOp::Clear);
    let texts: Vec<&str> = render
        .ops()
        .iter()
        .filter_map(|op| match op {
            RenderOp::DrawText(text, _) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.iter().any(|t| t.contains("Debug Params")));
    assert!(texts.iter().any(|t| t.starts_with("FPS:")));
    assert_eq!(*draws.borrow(), 0);
}

#[test]
fn input_events_forward_unconditionally_through_dispatch() {
    let (mut app, mut host) = grid_shell(1, 1);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    app.ctx
        .signals
        .key_up
        .connect(move |_| sink.borrow_mut().push("key_up"));
    let sink = Rc::clone(&seen);
    app.ctx
        .signals
        .mouse_down
        .connect(move |_| sink.borrow_mut().push("mouse_down"));
    let sink = Rc::clone(&seen);
    app.ctx
        .signals
        .mouse_up
        .connect(move |_| sink.borrow_mut().push("mouse_up"));
    let sink = Rc::clone(&seen);
    app.ctx
        .signals
        .mouse_move
        .connect(move |_| sink.borrow_mut().push("mouse_move"));
    let sink = Rc::clone(&seen);
    app.ctx
        .signals
        .mouse_drag
        .connect(move |_| sink.borrow_mut().push("mouse_drag"));
    let wheel_delta = Rc::new(RefCell::new(Vec2::ZERO));
    let sink = Rc::clone(&seen);
    let delta = Rc::clone(&wheel_delta);
    app.ctx.signals.mouse_wheel.connect(move |e| {
        *delta.borrow_mut() = e.wheel;
        sink.borrow_mut().push("mouse_wheel");
    });
    let dropped = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let paths = Rc::clone(&dropped);
    app.ctx.signals.file_drop.connect(move |e| {
        paths.borrow_mut().extend(e.paths.clone());
        sink.borrow_mut().push("file_drop");
    });

    let pos = Vec2::new(4.0, 8.0);
    let events = vec![
        HostEvent::KeyUp(press(KeyCode::Char('x'), KeyModifiers::NONE)),
        HostEvent::MouseDown(MouseEvent::button(pos, MouseButton::Left)),
        HostEvent::MouseUp(MouseEvent::button(pos, MouseButton::Left)),
        HostEvent::MouseMove(MouseEvent::at(pos)),
        HostEvent::MouseDrag(MouseEvent::at(pos)),
        HostEvent::MouseWheel(MouseEvent::wheel(pos, Vec2::new(0.0, -1.0))),
        HostEvent::FileDrop(FileDropEvent {
            pos,
            paths: vec!["/tmp/drop.png".into()],
        }),
    ];
    for event in events {
        assert!(matches!(
            app.dispatch(&mut host, event),
            ControlFlow::Continue
        ));
    }
    // one emission per event, in dispatch order
    assert_eq!(
        *seen.borrow(),
        vec![
            "key_up",
            "mouse_down",
            "mouse_up",
            "mouse_move",
            "mouse_drag",
            "mouse_wheel",
            "file_drop",
        ]
    );
    assert_eq!(*wheel_delta.borrow(), Vec2::new(0.0, -1.0));
    assert_eq!(
        *dropped.borrow(),
        vec![std::path::PathBuf::from("/tmp/drop.png")]
    );
}

#[test]
fn closed_content_window_falls_back_to_untransformed_draw() {
    let config = Config::from_json_str(indoc! {r#"
        {
            "mode": "custom",
            "windows": [
                { "x": 0, "y": 0, "w": 800, "h": 600 },
                { "x": 800, "y": 0, "w": 800, "h": 600 }
            ],
            "app_scale": 2.0
        }
    "#})
    .unwrap();
    let mut host = HeadlessHost::new(Vec::new());
    let mut app = AppShell::new(config);
    app.initialize(&mut host);

    let mut render = HeadlessRender::new();
    app.draw(1, &mut render);
    assert!(render.ops().contains(&RenderOp::Translate(Vec2::new(-800.0, 0.0))));

    // closing the window detaches its record
    assert!(matches!(
        app.dispatch(&mut host, HostEvent::WindowClosed(1)),
        ControlFlow::Continue
    ));
    assert!(app.ctx.registry.lookup(1).is_none());

    let draws = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&draws);
    app.ctx.signals.draw.connect(move |_| *sink.borrow_mut() += 1);
    render.clear_ops();
    app.draw(1, &mut render);
    assert_eq!(render.ops(), &[RenderOp::Clear]);
    assert_eq!(*draws.borrow(), 1);
}

#[test]
fn cleanup_emits_exactly_once() {
    let (mut app, mut host) = grid_shell(1, 1);
    let cleanups = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&cleanups);
    app.ctx
        .signals
        .cleanup
        .connect(move |_| *sink.borrow_mut() += 1);

    assert!(matches!(
        app.dispatch(&mut host, HostEvent::QuitRequested),
        ControlFlow::Quit
    ));
    app.cleanup();
    assert_eq!(*cleanups.borrow(), 1);
}

#[test]
fn update_emits_and_samples_frame_rate() {
    let (mut app, _host) = grid_shell(1, 1);
    let updates = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&updates);
    app.ctx
        .signals
        .update
        .connect(move |_| *sink.borrow_mut() += 1);
    app.update();
    app.update();
    assert_eq!(*updates.borrow(), 2);
}

#[test]
fn from_asset_reports_load_and_parse_failures() {
    let mut host = HeadlessHost::new(Vec::new());
    let err = AppShell::from_asset(&mut host, "/definitely/not/there.json").unwrap_err();
    assert!(matches!(err, multiwin::ConfigError::Load(_)));

    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ nope").unwrap();
    let err = AppShell::from_asset(&mut host, bad.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, multiwin::ConfigError::Parse(_)));

    let good = dir.path().join("good.json");
    std::fs::write(&good, r#"{ "mode": "span" }"#).unwrap();
    let mut app = AppShell::from_asset(&mut host, good.to_str().unwrap()).unwrap();
    app.initialize(&mut host);
    // zero displays: no content windows, just the params window
    assert_eq!(app.ctx.registry.len(), 1);
}
