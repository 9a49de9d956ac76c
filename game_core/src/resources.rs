use crate::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point for `side`. Saturates rather than wrapping.
    pub fn increment(&mut self, side: Side) {
        let points = match side {
            Side::Left => &mut self.player,
            Side::Right => &mut self.ai,
        };
        *points = points.saturating_add(1);
    }

    /// The side that has reached `win_score` exactly, if any
    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.player == win_score {
            Some(Side::Left)
        } else if self.ai == win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.ai_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.ai_scored
    }
}

/// A discrete key press the menus care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Escape,
}

/// Snapshot of the input provider for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    /// Application-close request (window closed, Ctrl+C)
    pub quit: bool,
    /// Key pressed since the previous frame
    pub key: Option<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net paddle direction; holding both keys cancels out
    pub fn paddle_dir(&self) -> i8 {
        (self.down as i8) - (self.up as i8)
    }
}
