pub mod logging;

pub use logging::{Level, Logger, LoggerTrait};
