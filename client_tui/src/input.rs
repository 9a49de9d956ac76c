use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputState, Key};

/// Frames a press keeps a paddle key "down" when the terminal cannot report
/// key releases. Covers the gap between auto-repeat events.
const HOLD_FRAMES: u64 = 8;

/// How long a press lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldMode {
    /// The terminal reports releases (kitty keyboard protocol)
    UntilRelease,
    /// Only presses and repeats arrive; a press holds for a few frames
    Frames(u64),
}

impl HoldMode {
    pub fn detect(reports_release: bool) -> Self {
        if reports_release {
            HoldMode::UntilRelease
        } else {
            HoldMode::Frames(HOLD_FRAMES)
        }
    }
}

/// Turns a stream of crossterm key events into per-frame input snapshots
#[derive(Debug)]
pub struct KeyTracker {
    mode: HoldMode,
    frame: u64,
    up_until: Option<u64>,
    down_until: Option<u64>,
    quit: bool,
    pending: Option<Key>,
}

impl KeyTracker {
    pub fn new(mode: HoldMode) -> Self {
        Self {
            mode,
            frame: 0,
            up_until: None,
            down_until: None,
            quit: false,
            pending: None,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        let pressed = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => true,
            KeyEventKind::Release => false,
        };
        let until = pressed.then(|| self.hold_until());

        match key.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => self.up_until = until,
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => self.down_until = until,
            KeyCode::Char(c @ '0'..='9') if key.kind == KeyEventKind::Press => {
                self.pending = c.to_digit(10).map(|d| Key::Digit(d as u8));
            }
            KeyCode::Esc if key.kind == KeyEventKind::Press => {
                self.pending = Some(Key::Escape);
            }
            _ => {}
        }
    }

    /// Input for the next frame. Discrete key presses are handed out once.
    pub fn snapshot(&mut self) -> InputState {
        let held = |until: Option<u64>| until.is_some_and(|until| self.frame < until);
        let input = InputState {
            up: held(self.up_until),
            down: held(self.down_until),
            quit: self.quit,
            key: self.pending.take(),
        };
        self.frame += 1;
        input
    }

    fn hold_until(&self) -> u64 {
        match self.mode {
            HoldMode::UntilRelease => u64::MAX,
            HoldMode::Frames(frames) => self.frame + frames,
        }
    }
}
