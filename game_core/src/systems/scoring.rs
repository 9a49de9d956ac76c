use hecs::World;

use crate::{Ball, Events, Playfield, Score, Side};

/// Check if the ball left the playfield (scoring)
pub fn check_scoring(
    world: &mut World,
    field: &Playfield,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            // Past the player's paddle
            score.increment(Side::Right);
            events.ai_scored = true;
            ball.reset();
        } else if ball.pos.x >= field.width {
            score.increment(Side::Left);
            events.player_scored = true;
            ball.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config};
    use glam::Vec2;

    fn setup_world() -> (World, Playfield, Score, Events, hecs::Entity) {
        let mut world = World::new();
        let config = Config::new();
        let ball = create_ball(&mut world, &config);
        (world, config.playfield(), Score::new(), Events::new(), ball)
    }

    fn place_ball(world: &mut World, ball: hecs::Entity, x: f32) {
        world.get::<&mut Ball>(ball).unwrap().pos.x = x;
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut world, field, mut score, mut events, ball) = setup_world();
        place_ball(&mut world, ball, 0.0);

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score.ai, 1, "AI should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.ai_scored);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, field, mut score, mut events, ball) = setup_world();
        place_ball(&mut world, ball, field.width);

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.ai, 0);
        assert!(events.player_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, field, mut score, mut events, ball) = setup_world();
        {
            let mut b = world.get::<&mut Ball>(ball).unwrap();
            b.pos = Vec2::new(-2.0, 40.0);
            b.vel = Vec2::new(-5.0, -5.0);
        }

        check_scoring(&mut world, &field, &mut score, &mut events);

        let b = world.get::<&Ball>(ball).unwrap();
        assert_eq!(b.pos, field.center(), "Ball should reset to center");
        assert_eq!(b.vel, b.serve_vel, "Ball should take the serve velocity");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, field, mut score, mut events, _ball) = setup_world();

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.scored(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, field, mut score, mut events, ball) = setup_world();

        place_ball(&mut world, ball, field.width + 1.0);
        check_scoring(&mut world, &field, &mut score, &mut events);
        events.clear();

        place_ball(&mut world, ball, field.width + 1.0);
        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score.player, 2, "Scores should accumulate");
        assert_eq!(score.ai, 0);
    }
}
