//! Terminal runner (default binary).
//!
//! Single-threaded loop: poll crossterm for keys until the next frame, feed actions and
//! elapsed time through `GameState::handle`, then redraw the changed cells.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameEvent, GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, RunState, FRAME_MS};
use blockfall::{AppConfig, EventLog, LogRecord};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    // Open before entering the alternate screen so errors stay readable.
    let log = EventLog::from_path(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, mut log: EventLog) -> Result<()> {
    let mut game = GameState::with_config(config.engine_config());
    game.start();
    log.record(&LogRecord::SessionStart {
        seed: game.seed(),
        randomizer: game.config().randomizer.as_str(),
        drop_interval_ms: game.config().drop_interval_ms,
    });

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let before = game.run_state();
                        dirty |= game.handle(GameEvent::Action(action));
                        observe(&mut game, &mut log, before, action == GameAction::Reset);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms >= FRAME_MS {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            let before = game.run_state();
            dirty |= game.handle(GameEvent::Tick { elapsed_ms });
            observe(&mut game, &mut log, before, false);
        }
    }
}

/// Log whatever the last event changed.
fn observe(game: &mut GameState, log: &mut EventLog, before: RunState, was_reset: bool) {
    if was_reset {
        log.record(&LogRecord::Reset);
    }
    if let Some(lock) = game.take_last_lock() {
        log.record(&LogRecord::Lock(lock));
    }
    let after = game.run_state();
    if before == after || was_reset {
        return;
    }
    match after {
        RunState::Paused => log.record(&LogRecord::Paused),
        RunState::Running => log.record(&LogRecord::Resumed),
        RunState::GameOver => log.record(&LogRecord::GameOver {
            score: game.score(),
            lines: game.lines(),
        }),
    }
}
