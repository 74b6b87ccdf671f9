pub mod errors;
pub mod models;

pub use errors::RenshuuError;
pub use models::{ Entry, ItemKind, SampledItem, SentenceRequirement };
