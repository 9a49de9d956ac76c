use std::io::{self, Write};

use game_core::{Cue, CueSink};

/// Rings the terminal bell for every cue
pub struct BellCues<W> {
    out: W,
}

impl<W: Write> BellCues<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl BellCues<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CueSink for BellCues<W> {
    fn play(&mut self, cue: Cue) {
        // A missed bell is not worth interrupting the game for
        if let Err(err) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            log::debug!("dropped {cue:?} cue: {err}");
        }
    }
}
