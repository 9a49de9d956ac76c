use std::time::Duration;

use glam::Vec2;
use thiserror::Error;

use crate::{Params, Playfield, Side};

/// Construction-time configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("best-of-{0} is not offered (choose 3, 5 or 7)")]
    UnsupportedBestOf(u8),
    #[error("winning score must be at least 1")]
    ZeroWinningScore,
    #[error("playfield {width}x{height} cannot fit the paddles and ball")]
    PlayfieldTooSmall { width: f32, height: f32 },
}

/// Match formats offered by the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestOf {
    Three,
    Five,
    Seven,
}

impl BestOf {
    pub fn games(self) -> u8 {
        match self {
            BestOf::Three => 3,
            BestOf::Five => 5,
            BestOf::Seven => 7,
        }
    }

    /// First to `ceil((N + 1) / 2)` points takes the match
    pub fn winning_score(self) -> u8 {
        (self.games() + 1) / 2
    }
}

impl TryFrom<u8> for BestOf {
    type Error = ConfigError;

    fn try_from(games: u8) -> Result<Self, Self::Error> {
        match games {
            3 => Ok(BestOf::Three),
            5 => Ok(BestOf::Five),
            7 => Ok(BestOf::Seven),
            other => Err(ConfigError::UnsupportedBestOf(other)),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_velocity: Vec2,
    pub win_score: u8,
    pub game_over_dwell: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_velocity: Vec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            win_score: Params::WIN_SCORE,
            game_over_dwell: Duration::from_millis(Params::GAME_OVER_DWELL_MS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best_of(mut self, best_of: BestOf) -> Self {
        self.win_score = best_of.winning_score();
        self
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.playfield_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Starting Y (top edge) that vertically centres a paddle
    pub fn paddle_start_y(&self) -> f32 {
        self.playfield_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }

        let min_width = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        let min_height = self.paddle_height.max(self.ball_size);
        if self.ball_size <= 0.0
            || self.playfield_width <= min_width
            || self.playfield_height <= min_height
        {
            return Err(ConfigError::PlayfieldTooSmall {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }

        Ok(())
    }
}
