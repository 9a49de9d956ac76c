use hecs::World;

use crate::{Ball, Control, Events, Paddle, PaddleIntent, Playfield};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, field: &Playfield) {
    for (_entity, (paddle, intent, control)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, &Control)>()
    {
        if *control == Control::Manual && intent.dir != 0 {
            let delta = intent.dir as f32 * paddle.speed;
            paddle.move_by(delta, field);
        }
    }
}

/// Move the ball one frame, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance() {
            events.ball_hit_wall = true;
        }
    }
}
