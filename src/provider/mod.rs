pub mod client;
pub mod sample;
pub mod types;

pub use client::{ProviderError, SportsApiClient};
pub use sample::sample_dataset;
