//! Terminal Wumpus runner (default binary).
//!
//! Arrow keys (or hjkl) move the selection, Space/Enter walks into it, `w` and
//! `u` mark the selected room, `q`/Esc quits.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_wumpus::core::{maps, Terminal, World};
use tui_wumpus::term::{Screen, TerminalRenderer};
use tui_wumpus::types::POLL_MS;
use tui_wumpus::{Control, Game, MapFile};

#[derive(Parser)]
#[command(name = "tui-wumpus")]
#[command(about = "Hunt the wumpus in a grid of box-drawn rooms")]
#[command(version)]
struct Cli {
    /// JSON map file to play instead of the built-in cave
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Print the map's raw room data and exit
    #[arg(long)]
    dump: bool,

    /// Write logs to this file (the game screen owns stdout)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let map = cli.map.as_deref().map(MapFile::read).transpose()?;

    if cli.dump {
        return dump(map.as_ref());
    }

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let screen = Screen::with_renderer(w, h, TerminalRenderer::new());
    let mut game = Game::new(build_world(screen, map.as_ref())?);

    let entered = match game.world_mut().terminal_mut().renderer_mut() {
        Some(renderer) => renderer.enter(),
        None => Ok(()),
    };
    let result = entered.and_then(|()| run(&mut game));

    // Always try to restore terminal state, even if entering failed half way.
    if let Some(renderer) = game.world_mut().terminal_mut().renderer_mut() {
        let _ = renderer.exit();
    }
    result
}

fn run(game: &mut Game<Screen>) -> Result<()> {
    let poll = Duration::from_millis(POLL_MS);

    loop {
        let mut key = None;
        if event::poll(poll)? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => key = Some(k),
                Event::Resize(w, h) => {
                    game.world_mut().terminal_mut().resize(w, h);
                    game.redraw()?;
                }
                _ => {}
            }
        }

        if game.step(key)? == Control::Exit {
            return Ok(());
        }
    }
}

fn build_world<T: Terminal>(terminal: T, map: Option<&MapFile>) -> Result<World<T>> {
    let raw = map.map(MapFile::raw).unwrap_or(maps::DEFAULT);
    World::with_map(terminal, &raw).context("could not load map")
}

/// Render the raw dump into an off-screen buffer and print it.
fn dump(map: Option<&MapFile>) -> Result<()> {
    let raw = map.map(MapFile::raw).unwrap_or(maps::DEFAULT);
    // Up to five digits and a comma per room, plus the header line.
    let cols = (raw.width * 6).max(16) as u16;
    let rows = raw.height as u16 + 1;

    let mut world = build_world(Screen::headless(cols, rows), map)?;
    world.dump_raw_data();
    println!("{}", world.terminal().text());
    Ok(())
}

fn init_logging(path: &Path, verbosity: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
