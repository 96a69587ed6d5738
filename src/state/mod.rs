//! Application state module

mod app_state;
mod forms;
mod progress;
mod splash_state;

pub use app_state::*;
pub use forms::*;
pub use progress::*;
pub use splash_state::*;
