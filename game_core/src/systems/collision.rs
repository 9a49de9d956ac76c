use hecs::World;

use crate::{Ball, Events, Paddle, Side};

/// Bounce the ball off the paddle it is heading toward
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Copy the paddles out first so the ball can be borrowed mutably
    let mut player = None;
    let mut ai = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => player = Some(*paddle),
            Side::Right => ai = Some(*paddle),
        }
    }

    let (Some(player), Some(ai)) = (player, ai) else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.check_collision(&player, &ai) {
            events.ball_hit_paddle = true;
        }
    }
}
