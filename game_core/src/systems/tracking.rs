use hecs::World;

use crate::{Ball, Control, Paddle, Playfield};

/// Move every tracking paddle one step toward the ball
pub fn track_ball(world: &mut World, field: &Playfield) {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return;
    };

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &Control)>() {
        if *control == Control::Tracking {
            paddle.auto_track(&ball, field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Side};

    #[test]
    fn test_tracking_paddle_follows_ball() {
        let mut world = World::new();
        let config = Config::new();
        let field = config.playfield();
        let player = create_paddle(&mut world, &config, Side::Left, Control::Manual);
        let ai = create_paddle(&mut world, &config, Side::Right, Control::Tracking);
        let ball = create_ball(&mut world, &config);
        world.get::<&mut Ball>(ball).unwrap().pos.y = 20.0;

        track_ball(&mut world, &field);

        let start = config.paddle_start_y();
        assert_eq!(world.get::<&Paddle>(ai).unwrap().pos.y, start - config.paddle_speed);
        assert_eq!(
            world.get::<&Paddle>(player).unwrap().pos.y,
            start,
            "Manual paddle is never auto-tracked"
        );
    }

    #[test]
    fn test_tracking_paddle_never_leaves_field() {
        let mut world = World::new();
        let config = Config::new();
        let field = config.playfield();
        let ai = create_paddle(&mut world, &config, Side::Right, Control::Tracking);
        let ball = create_ball(&mut world, &config);
        world.get::<&mut Ball>(ball).unwrap().pos.y = field.height - config.ball_size;

        for _ in 0..200 {
            track_ball(&mut world, &field);
        }

        let y = world.get::<&Paddle>(ai).unwrap().pos.y;
        assert_eq!(y, field.height - config.paddle_height);
    }

    #[test]
    fn test_no_ball_no_tracking() {
        let mut world = World::new();
        let config = Config::new();
        let ai = create_paddle(&mut world, &config, Side::Right, Control::Tracking);

        track_ball(&mut world, &config.playfield());

        assert_eq!(world.get::<&Paddle>(ai).unwrap().pos.y, config.paddle_start_y());
    }
}
