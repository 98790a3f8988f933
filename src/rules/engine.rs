//! Rules engine trait for the guessing games.
//!
//! Each game implements `RulesEngine` to define:
//! - How one input changes the round state
//! - When the round or session is over
//! - What hidden answer to reveal once it is

/// Result of a finished round or session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// The player found the answer (or cleared every word).
    Won,
    /// The player ran out of lives.
    Lost,
}

impl GameResult {
    /// Check if the player won.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Won
    }
}

/// Rules engine trait.
///
/// The controller calls these methods for every input; engines never
/// render anything themselves.
///
/// ## Implementation Notes
///
/// - `apply`: Return `None` when the state is not accepting input. Any
///   returned outcome must describe a fully committed change (or none).
/// - `is_terminal`: Return `None` while play continues
/// - `answer`: Only meaningful once `is_terminal` returns `Some`
pub trait RulesEngine {
    /// Mutable state of one round or session.
    type State;

    /// One player action.
    type Input: ?Sized;

    /// Tagged result of evaluating one input.
    type Outcome;

    /// Evaluate one input against the state.
    fn apply(&self, state: &mut Self::State, input: &Self::Input) -> Option<Self::Outcome>;

    /// Check if play is over.
    ///
    /// Returns `Some(result)` once the state is terminal, `None` while it continues.
    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;

    /// The hidden answer, if the state is terminal and has one to reveal.
    fn answer(&self, state: &Self::State) -> Option<String>;

    // === Convenience Methods ===

    /// Apply a script of inputs in order, collecting accepted outcomes.
    ///
    /// Stops early once the state becomes terminal.
    fn apply_all<'a, I>(&self, state: &mut Self::State, inputs: I) -> Vec<Self::Outcome>
    where
        I: IntoIterator<Item = &'a Self::Input>,
        Self::Input: 'a,
    {
        let mut outcomes = Vec::new();

        for input in inputs {
            if self.is_terminal(state).is_some() {
                break;
            }
            if let Some(outcome) = self.apply(state, input) {
                outcomes.push(outcome);
            }
        }

        outcomes
    }
}
