pub mod classic;
pub mod demo;
pub mod strict;

pub use demo::{DemoEngine, SAMPLE_INPUT};
pub use crate::utils::error::Result;
