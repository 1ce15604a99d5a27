pub mod console;
pub mod display;

pub use console::Console;
pub use display::{format_elapsed, render_matches};
