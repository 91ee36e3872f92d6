mod app;
mod demo;
mod query;
mod watch;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use isopix_scene::ShadowMode;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use app::{App, ViewOverrides, build_scene};
use query::QueryParams;

#[derive(Parser, Debug)]
#[command(name = "isopix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Isometric cube scene viewer", long_about = None)]
struct Cli {
    /// Scene file (TOML). The built-in demo scene is shown when omitted.
    scene: Option<PathBuf>,

    /// Initial rotation in radians
    #[arg(long)]
    rotation: Option<f32>,

    /// Shadow mode: none, top_only, diagonal_45
    #[arg(long, value_parser = parse_shadow_mode)]
    shadow_mode: Option<ShadowMode>,

    /// View overrides as a query string, e.g. "rotation=0.8&crush=0.4&shadow=top_only"
    #[arg(long)]
    params: Option<String>,

    /// Show the debug overlay (axes, octant, draw order)
    #[arg(long)]
    debug: bool,

    /// Reload the scene file whenever it changes on disk
    #[arg(long)]
    watch: bool,

    /// Also write a debug-level log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: i32,

    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_shadow_mode(s: &str) -> Result<ShadowMode, String> {
    ShadowMode::parse(s).ok_or_else(|| format!("unknown shadow mode '{}'", s))
}

fn init_logging(cli: &Cli) {
    // RUST_LOG takes precedence so filters work as usual
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
        return;
    }
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    let mut file_err = None;
    if let Some(path) = &cli.log_file {
        match File::create(path) {
            Ok(f) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), f)),
            Err(e) => file_err = Some(e),
        }
    }
    let _ = CombinedLogger::init(loggers);
    if let (Some(e), Some(path)) = (file_err, &cli.log_file) {
        log::warn!("cannot open log file {}: {}", path.display(), e);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli);

    let overrides = ViewOverrides {
        params: cli
            .params
            .as_deref()
            .map(QueryParams::parse)
            .unwrap_or_default(),
        rotation: cli.rotation,
        shadow_mode: cli.shadow_mode,
        debug: cli.debug,
    };
    let scene = build_scene(cli.scene.as_ref(), &overrides)?;
    log::info!(
        "{} cube(s), shadow mode {}",
        scene.len(),
        scene.shadow_mode().as_str()
    );

    let reload_rx = match (&cli.scene, cli.watch) {
        (Some(path), true) => Some(watch::watch_file(path.clone())),
        (None, true) => {
            log::warn!("--watch needs a scene file; ignoring");
            None
        }
        _ => None,
    };

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("isopix")
        .build();
    rl.set_target_fps(60);

    let mut app = App::new(scene, cli.scene.clone(), overrides, reload_rx);
    while !rl.window_should_close() {
        app.step(&mut rl);
        app.render(&mut rl, &thread);
    }
    Ok(())
}
