pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::demo::{DemoEngine, SAMPLE_INPUT};
pub use utils::error::{Result, SeqError};
