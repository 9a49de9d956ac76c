mod audio;
mod cli;
mod event;
mod input;
mod surface;

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use game_core::{Config, CueSink, Phase, Score, Session, SilentCues};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use audio::BellCues;
use cli::Args;
use event::{Event, EventHandler};
use input::{HoldMode, KeyTracker};
use surface::TerminalSurface;

type Tui = TerminalSurface<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = args.config()?;

    enable_raw_mode()?;
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    let result = play(&args, &config, reports_release);

    // Restore terminal, even if setup or the loop failed
    let restored = restore_terminal(&mut io::stdout(), reports_release);
    let score = result?;
    restored.context("restoring terminal")?;

    log::info!("session over: player {} - ai {}", score.player, score.ai);
    Ok(())
}

fn play(args: &Args, config: &Config, reports_release: bool) -> anyhow::Result<Score> {
    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let surface = TerminalSurface::new(terminal, config.playfield());
    let cues: Box<dyn CueSink> = if args.mute {
        Box::new(SilentCues)
    } else {
        Box::new(BellCues::stdout())
    };
    log::info!(
        "starting: first to {}, {} ms frames, key release events: {}",
        config.win_score,
        args.tick_ms(),
        reports_release
    );

    let mut session = Session::new(config, surface, cues)?;
    run(&mut session, args, HoldMode::detect(reports_release))?;
    Ok(session.match_state().score())
}

/// Undo every terminal mode change. All steps run; the first error wins.
fn restore_terminal<W: Write>(out: &mut W, reports_release: bool) -> io::Result<()> {
    let flags = if reports_release {
        execute!(out, PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    flags.and(raw).and(screen)
}

fn run(
    session: &mut Session<Tui, Box<dyn CueSink>>,
    args: &Args,
    mode: HoldMode,
) -> anyhow::Result<()> {
    let event_handler = EventHandler::new(args.tick_ms());
    let mut keys = KeyTracker::new(mode);
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        match event_handler.next()? {
            Event::Key(key) => keys.on_key(key),
            Event::Tick => {
                let now = Instant::now();
                let dt = now - last_frame;
                last_frame = now;

                let phase = session.tick(&keys.snapshot(), dt);
                session
                    .surface_mut()
                    .take_error()
                    .context("drawing frame")?;
                if phase == Phase::Terminated {
                    return Ok(());
                }
            }
        }
    }
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    // The terminal belongs to the game, so logs go to a file
    let file = File::create(&args.log_file)
        .with_context(|| format!("creating log file {}", args.log_file.display()))?;
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rejects its first write, then records everything
    struct FlakyWriter {
        failed: bool,
        written: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("broken pipe"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_terminal_writes_leave_sequences() {
        let mut out = Vec::new();
        restore_terminal(&mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"), "Should leave the alternate screen");
        assert!(text.contains("\x1b[?25h"), "Should show the cursor");
    }

    #[test]
    fn test_restore_terminal_continues_after_failed_step() {
        let mut out = FlakyWriter {
            failed: false,
            written: Vec::new(),
        };

        let result = restore_terminal(&mut out, true);

        assert!(result.is_err(), "First error is reported");
        let text = String::from_utf8(out.written).unwrap();
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }
}
