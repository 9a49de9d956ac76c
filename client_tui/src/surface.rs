//! Ratatui implementation of the drawing seam.
//!
//! Draw calls are collected until `present`, then painted onto a braille
//! canvas whose bounds are the playfield. Screen-space y grows downwards, the
//! canvas y grows upwards, so every y is flipped on the way in.

use std::io;

use game_core::{Aabb, Color, DrawCommand, Playfield, Surface, TextAnchor};
use glam::Vec2;
use ratatui::backend::Backend;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Terminal;

const HELP: &str = " W/S or \u{2191}/\u{2193} move \u{b7} Ctrl+C quit ";

pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    field: Playfield,
    background: Color,
    pending: Vec<DrawCommand>,
    error: Option<io::Error>,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>, field: Playfield) -> Self {
        Self {
            terminal,
            field,
            background: Color::BLACK,
            pending: Vec::new(),
            error: None,
        }
    }

    /// The first error hit while presenting, if any
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.background = color;
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
        let commands = std::mem::take(&mut self.pending);
        let field = self.field;
        let background = to_color(self.background);

        let result = self.terminal.draw(|frame| {
            let area = frame.area();
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" Pong ")
                .title_bottom(HELP);
            let inner = block.inner(area);
            let scale = Scale::new(field, inner);

            let canvas = Canvas::default()
                .block(block)
                .marker(Marker::Braille)
                .background_color(background)
                .x_bounds([0.0, field.width as f64])
                .y_bounds([0.0, field.height as f64])
                .paint(|ctx| {
                    for command in &commands {
                        paint(ctx, &scale, command);
                    }
                });
            frame.render_widget(canvas, area);
        });

        if let Err(err) = result {
            log::warn!("terminal draw failed: {err}");
            self.error.get_or_insert(err);
        }
    }
}

/// Playfield units per terminal dot and per character cell
struct Scale {
    height: f64,
    dot_height: f64,
    cell_width: f64,
}

impl Scale {
    fn new(field: Playfield, inner: Rect) -> Self {
        let cols = inner.width.max(1) as f64;
        let rows = inner.height.max(1) as f64;
        Self {
            height: field.height as f64,
            // Braille packs 4 dots per cell vertically
            dot_height: field.height as f64 / (rows * 4.0),
            cell_width: field.width as f64 / cols,
        }
    }

    fn flip(&self, y: f32) -> f64 {
        self.height - y as f64
    }
}

fn paint(ctx: &mut Context, scale: &Scale, command: &DrawCommand) {
    match command {
        DrawCommand::Clear(_) => {}
        DrawCommand::Rect(color, rect) => {
            // Stack horizontal lines a dot apart to fill the box
            let mut y = rect.min.y as f64;
            while y <= rect.max.y as f64 {
                ctx.draw(&CanvasLine {
                    x1: rect.min.x as f64,
                    y1: scale.height - y,
                    x2: rect.max.x as f64,
                    y2: scale.height - y,
                    color: to_color(*color),
                });
                y += scale.dot_height;
            }
        }
        DrawCommand::Ellipse(color, rect) => {
            let center = rect.center();
            ctx.draw(&Circle {
                x: center.x as f64,
                y: scale.flip(center.y),
                radius: (rect.width().max(rect.height()) / 2.0) as f64,
                color: to_color(*color),
            });
        }
        DrawCommand::Line(color, from, to) => {
            ctx.draw(&CanvasLine {
                x1: from.x as f64,
                y1: scale.flip(from.y),
                x2: to.x as f64,
                y2: scale.flip(to.y),
                color: to_color(*color),
            });
        }
        DrawCommand::Text(text, color, anchor) => {
            let (x, y) = match anchor {
                TextAnchor::TopLeft(pos) => (pos.x as f64, scale.flip(pos.y)),
                TextAnchor::Center(pos) => {
                    let half = text.chars().count() as f64 * scale.cell_width / 2.0;
                    (pos.x as f64 - half, scale.flip(pos.y))
                }
            };
            ctx.print(
                x,
                y,
                ratatui::text::Line::styled(text.clone(), Style::default().fg(to_color(*color))),
            );
        }
    }
}

fn to_color(color: Color) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn surface() -> TerminalSurface<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(82, 32)).unwrap();
        TerminalSurface::new(terminal, Playfield::new(800.0, 600.0))
    }

    fn screen_text(surface: &mut TerminalSurface<TestBackend>) -> String {
        let buffer = surface.terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<Vec<_>>()
            .concat()
    }

    #[test]
    fn test_present_paints_text() {
        let mut surface = surface();
        surface.clear(Color::BLACK);
        surface.text(
            "Player Wins!",
            Color::WHITE,
            TextAnchor::Center(Vec2::new(400.0, 300.0)),
        );
        surface.present();

        assert!(surface.take_error().is_ok());
        assert!(screen_text(&mut surface).contains("Player Wins!"));
    }

    #[test]
    fn test_present_paints_shapes() {
        let mut surface = surface();
        surface.clear(Color::BLACK);
        surface.fill_rect(
            Color::WHITE,
            Aabb::from_pos_size(Vec2::new(10.0, 250.0), Vec2::new(10.0, 100.0)),
        );
        surface.line(Color::WHITE, Vec2::new(400.0, 0.0), Vec2::new(400.0, 600.0));
        surface.present();

        let text = screen_text(&mut surface);
        assert!(text.contains("Pong"));
        // Braille dots live in U+2800..U+28FF
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28ff}').contains(&c)));
    }

    #[test]
    fn test_scale_flips_y() {
        let scale = Scale::new(Playfield::new(800.0, 600.0), Rect::new(0, 0, 80, 30));
        assert_eq!(scale.flip(0.0), 600.0);
        assert_eq!(scale.flip(600.0), 0.0);
        assert_eq!(scale.cell_width, 10.0);
        assert_eq!(scale.dot_height, 5.0);
    }
}
