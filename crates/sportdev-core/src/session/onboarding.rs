//! The linear onboarding flow.
//!
//! Four steps, forward-only: the user picks a training goal, a plan is
//! "generated" behind a fixed delay, the finished plan is presented, and the
//! main app unlocks. The delay timer belongs to the shell; it must be
//! scheduled exactly once on entry to `Generating` and cancelled if the
//! session ends early — never fired as a render side effect.

use std::cell::Cell;

/// How long the generating step runs before auto-advancing, in milliseconds.
pub const GENERATING_DELAY_MS: i32 = 2500;

/// Where the user is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Assessment,
    Generating,
    Ready,
    Completed,
}

/// The training goal chosen during assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingGoal {
    Hypertrophy,
    FatLoss,
    MaximumStrength,
    AthleticPerformance,
}

impl TrainingGoal {
    pub const ALL: [Self; 4] = [
        Self::Hypertrophy,
        Self::FatLoss,
        Self::MaximumStrength,
        Self::AthleticPerformance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hypertrophy => "Hypertrophy",
            Self::FatLoss => "Fat Loss",
            Self::MaximumStrength => "Maximum Strength",
            Self::AthleticPerformance => "Athletic Performance",
        }
    }
}

/// Onboarding state machine. Transitions out of the wrong step are ignored.
#[derive(Default)]
pub struct OnboardingFlow {
    step: Cell<OnboardingStep>,
    goal: Cell<Option<TrainingGoal>>,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step.get()
    }

    pub fn goal(&self) -> Option<TrainingGoal> {
        self.goal.get()
    }

    pub fn is_completed(&self) -> bool {
        self.step.get() == OnboardingStep::Completed
    }

    /// Assessment → Generating, recording the chosen goal.
    pub fn choose_goal(&self, goal: TrainingGoal) {
        if self.step.get() != OnboardingStep::Assessment {
            return;
        }
        self.goal.set(Some(goal));
        self.step.set(OnboardingStep::Generating);
    }

    /// Generating → Ready. Driven by the shell's delay timer.
    pub fn finish_generating(&self) {
        if self.step.get() != OnboardingStep::Generating {
            return;
        }
        self.step.set(OnboardingStep::Ready);
    }

    /// Ready → Completed. The main app is reachable from here on.
    pub fn start_training(&self) {
        if self.step.get() != OnboardingStep::Ready {
            return;
        }
        self.step.set(OnboardingStep::Completed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_advances_through_all_steps() {
        let flow = OnboardingFlow::new();
        assert_eq!(flow.step(), OnboardingStep::Assessment);

        flow.choose_goal(TrainingGoal::Hypertrophy);
        assert_eq!(flow.step(), OnboardingStep::Generating);
        assert_eq!(flow.goal(), Some(TrainingGoal::Hypertrophy));

        flow.finish_generating();
        assert_eq!(flow.step(), OnboardingStep::Ready);

        flow.start_training();
        assert!(flow.is_completed());
    }

    #[test]
    fn test_out_of_step_transitions_are_ignored() {
        let flow = OnboardingFlow::new();

        // Can't skip ahead from assessment.
        flow.finish_generating();
        flow.start_training();
        assert_eq!(flow.step(), OnboardingStep::Assessment);

        flow.choose_goal(TrainingGoal::FatLoss);

        // A stale timer firing twice must not double-advance.
        flow.finish_generating();
        flow.finish_generating();
        assert_eq!(flow.step(), OnboardingStep::Ready);

        // Choosing a goal after assessment changes nothing.
        flow.choose_goal(TrainingGoal::MaximumStrength);
        assert_eq!(flow.goal(), Some(TrainingGoal::FatLoss));
    }

    #[test]
    fn test_completed_is_terminal() {
        let flow = OnboardingFlow::new();
        flow.choose_goal(TrainingGoal::AthleticPerformance);
        flow.finish_generating();
        flow.start_training();

        flow.choose_goal(TrainingGoal::Hypertrophy);
        flow.finish_generating();
        assert!(flow.is_completed());
        assert_eq!(flow.goal(), Some(TrainingGoal::AthleticPerformance));
    }

    #[test]
    fn test_goal_labels() {
        for goal in TrainingGoal::ALL {
            assert!(!goal.label().is_empty());
        }
        assert_eq!(TrainingGoal::FatLoss.label(), "Fat Loss");
    }
}
