//! Drawing seam.
//!
//! The core never talks to a window or terminal. It issues primitive draw
//! calls against a [`Surface`] and the front end decides how to show them.

use glam::Vec2;

use crate::{Aabb, Ball, Paddle, Playfield, Score, Side};

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Where a piece of text is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    TopLeft(Vec2),
    Center(Vec2),
}

/// Rendering surface the game draws onto
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, color: Color, rect: Aabb);
    fn fill_ellipse(&mut self, color: Color, rect: Aabb);
    fn line(&mut self, color: Color, from: Vec2, to: Vec2);
    fn text(&mut self, text: &str, color: Color, anchor: TextAnchor);
    /// Show everything drawn since the last present
    fn present(&mut self);
}

/// Discards all drawing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _color: Color, _rect: Aabb) {}
    fn fill_ellipse(&mut self, _color: Color, _rect: Aabb) {}
    fn line(&mut self, _color: Color, _from: Vec2, _to: Vec2) {}
    fn text(&mut self, _text: &str, _color: Color, _anchor: TextAnchor) {}
    fn present(&mut self) {}
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Color, Aabb),
    Ellipse(Color, Aabb),
    Line(Color, Vec2, Vec2),
    Text(String, Color, TextAnchor),
}

/// Surface that keeps the commands of the frame being built and the frame
/// last presented
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame
    pub fn frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Every string drawn in the last presented frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.presented.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(text, _, _) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, color: Color, rect: Aabb) {
        self.pending.push(DrawCommand::Rect(color, rect));
    }

    fn fill_ellipse(&mut self, color: Color, rect: Aabb) {
        self.pending.push(DrawCommand::Ellipse(color, rect));
    }

    fn line(&mut self, color: Color, from: Vec2, to: Vec2) {
        self.pending.push(DrawCommand::Line(color, from, to));
    }

    fn text(&mut self, text: &str, color: Color, anchor: TextAnchor) {
        self.pending
            .push(DrawCommand::Text(text.to_owned(), color, anchor));
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}

/// Replay menu lines, top to bottom
pub const MENU_OPTIONS: [&str; 4] = [
    "Press 3 for Best of 3",
    "Press 5 for Best of 5",
    "Press 7 for Best of 7",
    "Press ESC to Exit",
];

const MENU_TOP: f32 = 200.0;
const MENU_SPACING: f32 = 50.0;
const SCORE_TOP: f32 = 20.0;

/// Paddles, ball, centre line and both scores
pub fn draw_scene(
    surface: &mut impl Surface,
    field: &Playfield,
    paddles: &[Paddle],
    ball: Option<&Ball>,
    score: &Score,
) {
    surface.clear(Color::BLACK);

    for paddle in paddles {
        surface.fill_rect(Color::WHITE, paddle.bounds());
    }
    if let Some(ball) = ball {
        surface.fill_ellipse(Color::WHITE, ball.bounds());
    }
    surface.line(
        Color::WHITE,
        Vec2::new(field.width / 2.0, 0.0),
        Vec2::new(field.width / 2.0, field.height),
    );

    surface.text(
        &score.player.to_string(),
        Color::WHITE,
        TextAnchor::TopLeft(Vec2::new(field.width / 4.0, SCORE_TOP)),
    );
    surface.text(
        &score.ai.to_string(),
        Color::WHITE,
        TextAnchor::TopLeft(Vec2::new(field.width * 3.0 / 4.0, SCORE_TOP)),
    );
}

pub fn winner_message(winner: Side) -> &'static str {
    match winner {
        Side::Left => "Player Wins!",
        Side::Right => "AI Wins!",
    }
}

/// Winner banner in the middle of the field
pub fn draw_winner(surface: &mut impl Surface, field: &Playfield, winner: Side) {
    surface.text(
        winner_message(winner),
        Color::WHITE,
        TextAnchor::Center(field.center()),
    );
}

pub fn draw_replay_menu(surface: &mut impl Surface, field: &Playfield) {
    surface.clear(Color::BLACK);
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        let center = Vec2::new(field.width / 2.0, MENU_TOP + i as f32 * MENU_SPACING);
        surface.text(option, Color::WHITE, TextAnchor::Center(center));
    }
}
