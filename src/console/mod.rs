//! Line-oriented console: prompts, input and rendered game text

mod terminal;
mod ui;

pub use terminal::Console;
pub use ui::*;
