//! Terminal runner (default binary).
//!
//! Owns the loop: measure the wall-clock delta, feed it to the session, draw,
//! then wait up to `INPUT_POLL_MS` for one key and forward it as a command.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use fallgrid::cli::{init_logging, Cli};
use fallgrid::core::{EngineConfig, GameSession, Randomizer};
use fallgrid::input::{map_key, should_quit, KeyAction};
use fallgrid::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use fallgrid::types::INPUT_POLL_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.engine_config()?;
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter().context("entering terminal raw mode")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn new_session(config: &EngineConfig) -> Result<GameSession<Randomizer>> {
    let seed = config.resolve_seed();
    info!(
        seed,
        width = config.width,
        height = config.height,
        randomizer = ?config.randomizer,
        "starting session"
    );
    let source = Randomizer::new(config.randomizer, seed);
    Ok(GameSession::new(config, source)?)
}

fn run(term: &mut TerminalRenderer, config: &EngineConfig) -> Result<()> {
    let mut session = new_session(config)?;
    let view = GameView::default();
    let mut frame = FrameBuffer::new(0, 0);
    let poll = Duration::from_millis(INPUT_POLL_MS as u64);
    let mut last_update = Instant::now();

    loop {
        // Advance only by whole milliseconds so the remainder carries over.
        let elapsed_ms = last_update.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_update += Duration::from_millis(elapsed_ms as u64);
        session.update(elapsed_ms);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, Viewport::new(w, h), &mut frame);
        term.present(&frame)?;

        if !event::poll(poll)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                match map_key(key) {
                    Some(KeyAction::Command(command)) => {
                        session.apply(command);
                    }
                    Some(KeyAction::Restart) => {
                        session = new_session(config)?;
                        last_update = Instant::now();
                    }
                    None => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
