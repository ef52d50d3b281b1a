pub mod extractor;
pub mod locator;
pub mod normalizer;
pub mod pipeline;

pub use pipeline::{scrape, Outcome, Pipeline};
