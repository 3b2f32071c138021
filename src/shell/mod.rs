//! Interactive terminal shell: prompts, validation and the menu loop

mod app;
pub mod input;

pub use app::{Shell, GOODBYE};
pub use input::MenuChoice;
