pub mod config;
pub mod core;
pub mod curriculum;
pub mod sampler;
pub mod worksheet;

pub use config::{ Cli, Config };
pub use crate::core::RenshuuError;
pub use curriculum::Curriculum;
pub use sampler::{ ChapterMap, SampleOutcome, Sampler };
pub use worksheet::Worksheet;
