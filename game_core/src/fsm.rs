//! Match phase state machine
//!
//! `Playing -> GameOverDisplay -> ReplayMenu -> (Playing | Terminated)`.
//! A quit request ends the session from any phase.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOverDisplay,
    ReplayMenu,
    Terminated,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    GameOver,
    DwellElapsed,
    Replay,
    Exit,
    Quit,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: PhaseAction,
}

#[derive(Debug, Clone)]
pub struct PhaseFsm {
    phase: Phase,
}

impl Default for PhaseFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseFsm {
    pub fn new() -> Self {
        Self {
            phase: Phase::Playing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_transition(&self, action: PhaseAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PhaseAction) -> TransitionResult {
        let from = self.phase;

        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                log::info!("phase {:?} -> {:?} on {:?}", from, to, action);
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: PhaseAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Terminated, _) => None,
            (_, PhaseAction::Quit) => Some(Phase::Terminated),

            (Phase::Playing, PhaseAction::GameOver) => Some(Phase::GameOverDisplay),
            (Phase::GameOverDisplay, PhaseAction::DwellElapsed) => Some(Phase::ReplayMenu),
            (Phase::ReplayMenu, PhaseAction::Replay) => Some(Phase::Playing),
            (Phase::ReplayMenu, PhaseAction::Exit) => Some(Phase::Terminated),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut fsm = PhaseFsm::new();
        assert_eq!(fsm.phase(), Phase::Playing);

        assert!(fsm.transition(PhaseAction::GameOver).success);
        assert_eq!(fsm.phase(), Phase::GameOverDisplay);

        assert!(fsm.transition(PhaseAction::DwellElapsed).success);
        assert_eq!(fsm.phase(), Phase::ReplayMenu);

        assert!(fsm.transition(PhaseAction::Replay).success);
        assert_eq!(fsm.phase(), Phase::Playing);
    }

    #[test]
    fn test_exit_only_from_menu() {
        let mut fsm = PhaseFsm::new();
        assert!(!fsm.can_transition(PhaseAction::Exit));

        fsm.transition(PhaseAction::GameOver);
        assert!(!fsm.can_transition(PhaseAction::Exit));

        fsm.transition(PhaseAction::DwellElapsed);
        let result = fsm.transition(PhaseAction::Exit);
        assert!(result.success);
        assert_eq!(result.from, Phase::ReplayMenu);
        assert_eq!(result.to, Phase::Terminated);
    }

    #[test]
    fn test_quit_from_any_live_phase() {
        for steps in 0..3 {
            let mut fsm = PhaseFsm::new();
            let path = [
                PhaseAction::GameOver,
                PhaseAction::DwellElapsed,
                PhaseAction::Replay,
            ];
            for action in &path[..steps] {
                fsm.transition(*action);
            }
            assert!(fsm.transition(PhaseAction::Quit).success);
            assert_eq!(fsm.phase(), Phase::Terminated);
        }
    }

    #[test]
    fn test_terminated_is_final() {
        let mut fsm = PhaseFsm::new();
        fsm.transition(PhaseAction::Quit);
        for action in [
            PhaseAction::GameOver,
            PhaseAction::DwellElapsed,
            PhaseAction::Replay,
            PhaseAction::Exit,
            PhaseAction::Quit,
        ] {
            let result = fsm.transition(action);
            assert!(!result.success);
            assert_eq!(result.to, Phase::Terminated);
        }
    }

    #[test]
    fn test_invalid_transition_keeps_phase() {
        let mut fsm = PhaseFsm::new();
        let result = fsm.transition(PhaseAction::Replay);
        assert!(!result.success);
        assert_eq!(result.from, Phase::Playing);
        assert_eq!(result.to, Phase::Playing);
        assert_eq!(fsm.phase(), Phase::Playing);
    }
}
