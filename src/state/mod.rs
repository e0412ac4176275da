//! Application state wiring.
//!
//! Bundles the five shared containers (task lists, wallet address, theme and
//! connection flags) into one injectable [`AppState`].

mod state;

pub use state::AppState;
