use glam::Vec2;

use crate::{Aabb, Playfield};

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // human player
    Right, // AI
}

/// How a paddle is driven each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Follows the player's up/down intent
    Manual,
    /// Chases the ball one step per frame
    Tracking,
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left; x never changes after spawn
    pub size: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    /// Shift vertically by `delta_y`, then clamp to the playfield
    pub fn move_by(&mut self, delta_y: f32, field: &Playfield) {
        self.pos.y = field.clamp_y(self.pos.y + delta_y, self.size.y);
    }

    /// Step once toward the ball's vertical position.
    ///
    /// The step is the paddle's normal speed, so the AI can never outrun a
    /// human paddle. When already level with the ball it stays put.
    pub fn auto_track(&mut self, ball: &Ball, field: &Playfield) {
        let center_y = self.pos.y + self.size.y / 2.0;
        if center_y < ball.pos.y {
            self.move_by(self.speed, field);
        } else if center_y > ball.pos.y {
            self.move_by(-self.speed, field);
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // top-left
    pub vel: Vec2, // pixels per frame
    pub size: f32,
    pub serve_vel: Vec2,
    pub playfield: Playfield,
}

impl Ball {
    /// Create a ball at the centre of the playfield. `vel` is also the serve
    /// velocity used by every later `reset`.
    pub fn new(vel: Vec2, size: f32, playfield: Playfield) -> Self {
        Self {
            pos: playfield.center(),
            vel,
            size,
            serve_vel: vel,
            playfield,
        }
    }

    /// Advance one frame. Returns `true` if the ball bounced off the top or
    /// bottom wall.
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;

        if self.pos.y <= 0.0 || self.pos.y >= self.playfield.max_y(self.size) {
            self.pos.y = self.playfield.clamp_y(self.pos.y, self.size);
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Bounce off whichever paddle the ball is heading toward.
    ///
    /// Only `dx` flips; the vertical velocity and speed are untouched.
    pub fn check_collision(&mut self, player: &Paddle, ai: &Paddle) -> bool {
        let target = if self.vel.x < 0.0 {
            player
        } else if self.vel.x > 0.0 {
            ai
        } else {
            return false;
        };

        if self.bounds().intersects(&target.bounds()) {
            self.vel.x = -self.vel.x;
            return true;
        }
        false
    }

    /// Back to the centre with the serve velocity
    pub fn reset(&mut self) {
        self.pos = self.playfield.center();
        self.vel = self.serve_vel;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}

/// Movement intent for a manually controlled paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
