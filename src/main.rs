mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use bug_crossing::engine::Engine;
use bug_crossing::error::GameError;
use bug_crossing::input::{InputCommand, InputHandler};
use bug_crossing::resources::Resources;
use bug_crossing::sprites::ALL_KEYS;
use bug_crossing::surface::Canvas;

use display::Display;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit key arrives.  Each frame drains pending input, ticks
/// the engine, and presents the canvas, then sleeps off the rest of the
/// frame budget.
fn game_loop<W: Write>(
    out: &mut W,
    engine: &mut Engine,
    resources: &Resources,
    rx: &mpsc::Receiver<Event>,
    input: InputHandler,
) -> Result<(), GameError> {
    let mut rng = thread_rng();
    let mut canvas = Canvas::play_area();
    let mut display = Display::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                match input.translate(&key) {
                    Some(InputCommand::Quit) => return Ok(()),
                    Some(InputCommand::Move(dir)) => {
                        engine.handle_input(Some(dir));
                    }
                    None => {}
                }
            }
        }

        engine.tick(frame_start, &mut canvas, resources, &mut rng)?;

        let (width, height) = terminal::size()?;
        display.present(out, &canvas, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Only terminals speaking the kitty keyboard protocol report key
    // releases; everywhere else moves fire on key press.
    let input = InputHandler::for_terminal(terminal::supports_keyboard_enhancement().ok());
    info!("moves trigger on key {}", if input.moves_on_release() { "release" } else { "press" });

    // Pushing the flags succeeds on any Unix terminal, supported or not, so
    // this only tells us whether to pop them again on exit.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, input);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

/// Load every asset, then start the engine once they are all ready.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    input: InputHandler,
) -> Result<(), GameError> {
    let mut resources = Resources::new();
    resources.load(&ALL_KEYS);

    resources.on_ready(|resources| {
        let mut engine = Engine::new(resources)?;
        engine.reset();
        info!("assets ready, entering game loop");
        let result = game_loop(out, &mut engine, resources, rx, input);
        info!("game loop finished");
        result
    })?
}
