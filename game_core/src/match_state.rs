use hecs::{Entity, World};

use crate::audio::{emit_cues, CueSink};
use crate::{
    create_ball, create_paddle, step, Ball, BestOf, Config, ConfigError, Control, Events,
    InputState, Paddle, Playfield, Score, Side,
};

/// One match: two paddles, a ball, the score and the target to win.
pub struct MatchState<A> {
    world: World,
    player: Entity,
    ai: Entity,
    ball: Entity,
    field: Playfield,
    score: Score,
    winning_score: u8,
    events: Events,
    cues: A,
}

impl<A: CueSink> MatchState<A> {
    pub fn new(config: &Config, cues: A) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let player = create_paddle(&mut world, config, Side::Left, Control::Manual);
        let ai = create_paddle(&mut world, config, Side::Right, Control::Tracking);
        let ball = create_ball(&mut world, config);

        Ok(Self {
            world,
            player,
            ai,
            ball,
            field: config.playfield(),
            score: Score::new(),
            winning_score: config.win_score,
            events: Events::new(),
            cues,
        })
    }

    /// Run one frame and play the cues it produced
    pub fn update(&mut self, input: &InputState) -> Events {
        step(
            &mut self.world,
            &self.field,
            input,
            &mut self.score,
            &mut self.events,
        );
        emit_cues(&self.events, &mut self.cues);

        if self.events.scored() {
            log::info!(
                "point to {}: player {} - ai {}",
                if self.events.player_scored { "player" } else { "ai" },
                self.score.player,
                self.score.ai
            );
        }
        self.events
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.winner(self.winning_score)
    }

    /// Zero both scores and re-centre the ball. Paddles stay where they are.
    pub fn reset(&mut self) {
        self.score = Score::new();
        self.events.clear();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset();
        }
    }

    /// Switch to a new match format and start over
    pub fn start_best_of(&mut self, best_of: BestOf) {
        self.winning_score = best_of.winning_score();
        self.reset();
        log::info!(
            "new match: best of {} (first to {})",
            best_of.games(),
            self.winning_score
        );
    }
}

impl<A> MatchState<A> {
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winning_score(&self) -> u8 {
        self.winning_score
    }

    pub fn playfield(&self) -> &Playfield {
        &self.field
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.player,
            Side::Right => self.ai,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn paddles(&self) -> Vec<Paddle> {
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| self.paddle(side))
            .collect()
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn cues(&self) -> &A {
        &self.cues
    }
}
