//! Application module
//!
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Event: Terminal input turned into actions

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, UiConfig};
