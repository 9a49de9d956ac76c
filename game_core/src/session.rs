//! Frame-by-frame driver for a whole play session.
//!
//! The outer loop calls [`Session::tick`] once per frame with the current input
//! snapshot and the time since the previous frame. Simulation, the game-over
//! dwell and the replay menu are all phases of the same loop, so nothing in
//! here ever blocks.

use std::time::Duration;

use crate::audio::CueSink;
use crate::fsm::{Phase, PhaseAction, PhaseFsm};
use crate::render::{draw_replay_menu, draw_scene, draw_winner, Surface};
use crate::{BestOf, Config, ConfigError, InputState, Key, MatchState};

pub struct Session<S, A> {
    state: MatchState<A>,
    surface: S,
    fsm: PhaseFsm,
    dwell: Duration,
    dwell_left: Duration,
}

impl<S: Surface, A: CueSink> Session<S, A> {
    pub fn new(config: &Config, surface: S, cues: A) -> Result<Self, ConfigError> {
        Ok(Self {
            state: MatchState::new(config, cues)?,
            surface,
            fsm: PhaseFsm::new(),
            dwell: config.game_over_dwell,
            dwell_left: Duration::ZERO,
        })
    }

    /// Advance one frame and draw it. Returns the phase after the frame.
    pub fn tick(&mut self, input: &InputState, dt: Duration) -> Phase {
        if input.quit && self.fsm.can_transition(PhaseAction::Quit) {
            self.apply(PhaseAction::Quit);
        }

        match self.fsm.phase() {
            Phase::Playing => {
                self.state.update(input);
                if self.state.is_game_over() {
                    self.apply(PhaseAction::GameOver);
                    self.dwell_left = self.dwell;
                }
            }
            Phase::GameOverDisplay => {
                self.dwell_left = self.dwell_left.saturating_sub(dt);
                if self.dwell_left.is_zero() {
                    self.apply(PhaseAction::DwellElapsed);
                }
            }
            Phase::ReplayMenu => self.handle_menu_key(input.key),
            Phase::Terminated => return Phase::Terminated,
        }

        self.render();
        self.fsm.phase()
    }

    /// Every action issued here is legal for the current phase
    fn apply(&mut self, action: PhaseAction) {
        let result = self.fsm.transition(action);
        debug_assert!(
            result.success,
            "{:?} is not allowed in {:?}",
            action,
            result.from
        );
    }

    fn handle_menu_key(&mut self, key: Option<Key>) {
        match key {
            Some(Key::Digit(games)) => match BestOf::try_from(games) {
                Ok(best_of) => {
                    self.state.start_best_of(best_of);
                    self.apply(PhaseAction::Replay);
                }
                Err(err) => log::debug!("ignoring menu key: {err}"),
            },
            Some(Key::Escape) => self.apply(PhaseAction::Exit),
            None => {}
        }
    }

    fn render(&mut self) {
        let field = *self.state.playfield();
        match self.fsm.phase() {
            Phase::Playing => self.draw_match(),
            Phase::GameOverDisplay => {
                self.draw_match();
                if let Some(winner) = self.state.winner() {
                    draw_winner(&mut self.surface, &field, winner);
                }
            }
            Phase::ReplayMenu => draw_replay_menu(&mut self.surface, &field),
            Phase::Terminated => return,
        }
        self.surface.present();
    }

    fn draw_match(&mut self) {
        let ball = self.state.ball();
        draw_scene(
            &mut self.surface,
            self.state.playfield(),
            &self.state.paddles(),
            ball.as_ref(),
            &self.state.score(),
        );
    }
}

impl<S, A> Session<S, A> {
    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn is_terminated(&self) -> bool {
        self.fsm.phase() == Phase::Terminated
    }

    pub fn match_state(&self) -> &MatchState<A> {
        &self.state
    }

    pub fn match_state_mut(&mut self) -> &mut MatchState<A> {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
