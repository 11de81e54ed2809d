use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use multiwin::geometry::{Bounds, Display};
use multiwin::host::headless::{HeadlessHost, HeadlessRender};
use multiwin::keybindings::{Action, KeyBindings};
use multiwin::shell::{self, AppShell};

/// Offline layout inspector: resolves a window configuration against a
/// simulated display set and prints the resulting window plan.
#[derive(Debug, Parser)]
#[command(name = "multiwin", version, about)]
struct Cli {
    /// Path to a JSON config; the embedded default is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulated displays, laid out left to right.
    #[arg(long, default_value_t = 1)]
    displays: u32,

    /// Width of each simulated display in pixels.
    #[arg(long, default_value_t = 1920.0)]
    display_width: f32,

    /// Height of each simulated display in pixels.
    #[arg(long, default_value_t = 1080.0)]
    display_height: f32,

    /// Update/draw frames to run after initialization.
    #[arg(long, default_value_t = 1)]
    frames: u32,
}

fn main() -> ExitCode {
    multiwin::logging::init_default();
    let cli = Cli::parse();

    let config = match shell::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "could not initialize");
            return ExitCode::FAILURE;
        }
    };

    let displays: Vec<Display> = (0..cli.displays)
        .map(|i| {
            let x = i as f32 * cli.display_width;
            Display::new(Bounds::new(x, 0.0, x + cli.display_width, cli.display_height))
        })
        .collect();

    let mut host = HeadlessHost::new(displays);
    let mut app = AppShell::new(config);
    app.initialize(&mut host);

    println!("window plan ({} windows):", app.ctx.registry.len());
    for id in app.ctx.registry.ids() {
        if let Some(record) = app.ctx.registry.lookup(id) {
            let kind = if record.is_params() { "params" } else { "content" };
            println!(
                "  window {id}: {kind} index={} bounds=({}, {}, {}, {}) translation=({}, {})",
                record.index,
                record.bounds.x1,
                record.bounds.y1,
                record.bounds.x2,
                record.bounds.y2,
                record.translation.x,
                record.translation.y,
            );
        }
    }

    println!("host operations:");
    for op in host.ops() {
        println!("  {op:?}");
    }

    if app.ctx.config.default_key_handlers {
        let bindings = KeyBindings::default();
        println!("default key handlers:");
        for action in [Action::Quit, Action::ToggleCursor, Action::ToggleParams] {
            println!("  {}: {}", action, bindings.combos_for(action).join(", "));
        }
    }

    let mut render = HeadlessRender::new();
    for _ in 0..cli.frames {
        app.update();
        for id in app.ctx.registry.ids() {
            app.draw(id, &mut render);
        }
    }
    if cli.frames > 0 {
        println!("draw commands over {} frame(s): {}", cli.frames, render.ops().len());
    }

    app.cleanup();
    ExitCode::SUCCESS
}
