use crate::logging::ReactionLog;
use crate::observer::Observer;
use crate::subject::Subject;

/// `LowStateReactor` reacts to states strictly below this bound.
const LOW_REACTION_BOUND: u8 = 8;

/// `HighStateReactor` reacts to states strictly above this bound.
const HIGH_REACTION_BOUND: u8 = 4;

/// Reacts whenever the subject's state is strictly below 8.
///
/// Together with [`HighStateReactor`] this demonstrates two independent
/// reactions to the same state change: states 5 through 7 trigger both,
/// while an unset state triggers neither.
pub struct LowStateReactor<L: ReactionLog> {
    log: L,
}

impl<L: ReactionLog> LowStateReactor<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

impl<L: ReactionLog> Observer for LowStateReactor<L> {
    fn update(&self, subject: &Subject) {
        let Some(state) = subject.state() else {
            return;
        };

        if state < LOW_REACTION_BOUND {
            self.log.log_println(format!(
                "LowStateReactor: reacting to state {}",
                state
            ));
        }
    }
}

/// Reacts whenever the subject's state is strictly above 4.
pub struct HighStateReactor<L: ReactionLog> {
    log: L,
}

impl<L: ReactionLog> HighStateReactor<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

impl<L: ReactionLog> Observer for HighStateReactor<L> {
    fn update(&self, subject: &Subject) {
        let Some(state) = subject.state() else {
            return;
        };

        if state > HIGH_REACTION_BOUND {
            self.log.log_println(format!(
                "HighStateReactor: reacting to state {}",
                state
            ));
        }
    }
}
