//! Host-facing layer: input commands in, presenter calls out.
//!
//! - `InputCommand`: discrete user actions from the UI
//! - `Presenter`: the only component that renders
//! - `Arcade`: routes commands to the engines and reports the results

pub mod arcade;
pub mod command;
pub mod presenter;

pub use arcade::{ActiveGame, Arcade};
pub use command::InputCommand;
pub use presenter::{EventLog, Outcome, Presenter, PresenterEvent, RoundSnapshot};
