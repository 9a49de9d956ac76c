pub mod audio;
pub mod components;
pub mod config;
pub mod fsm;
pub mod map;
pub mod match_state;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use audio::{Cue, CueSink, SilentCues};
pub use components::*;
pub use config::*;
pub use fsm::{Phase, PhaseAction, PhaseFsm};
pub use map::*;
pub use match_state::MatchState;
pub use params::*;
pub use render::{Color, DisplayList, DrawCommand, NullSurface, Surface, TextAnchor};
pub use resources::*;
pub use session::Session;

use hecs::World;
use systems::*;

/// Run one deterministic frame of the Pong simulation
pub fn step(
    world: &mut World,
    field: &Playfield,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Player input moves the manual paddle
    ingest_input(world, input);
    move_paddles(world, field);

    // 2. Move ball (bounces off top/bottom walls)
    move_ball(world, events);

    // 3. Ball vs the paddle it is heading toward
    check_collisions(world, events);

    // 4. Check scoring (ball left the playfield)
    check_scoring(world, field, score, events);

    // 5. AI paddle chases the ball
    track_ball(world, field);
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
    control: Control,
) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        glam::Vec2::new(config.paddle_x(side), config.paddle_start_y()),
        glam::Vec2::new(config.paddle_width, config.paddle_height),
        config.paddle_speed,
    );
    world.spawn((paddle, control, PaddleIntent::new()))
}

/// Helper to create the ball entity at the centre of the playfield
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        config.ball_velocity,
        config.ball_size,
        config.playfield(),
    ),))
}
