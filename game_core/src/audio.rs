//! Audio cue seam.
//!
//! The simulation only names the cue; what (if anything) gets played is up to
//! the front end. Cues are fire-and-forget and never queued.

use crate::Events;

/// Discrete audio trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    WallBounce,
    PaddleHit,
    Score,
}

/// Something that can play cues
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

/// Drops every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl CueSink for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Records cues in order, handy for headless runs
impl CueSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

impl<C: CueSink + ?Sized> CueSink for Box<C> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }
}

/// Play the cues for a frame's events, in simulation order
pub fn emit_cues(events: &Events, sink: &mut impl CueSink) {
    if events.ball_hit_wall {
        sink.play(Cue::WallBounce);
    }
    if events.ball_hit_paddle {
        sink.play(Cue::PaddleHit);
    }
    if events.scored() {
        sink.play(Cue::Score);
    }
}
