pub mod config;
pub mod finder;

pub use config::{Config, LogConfig};
pub use finder::run;
