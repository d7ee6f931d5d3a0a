//! Application state and core logic

pub mod prompt;
pub mod state;

pub use state::App;
