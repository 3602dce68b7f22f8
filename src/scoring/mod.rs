pub mod features;
pub mod scorer;
pub mod selection;

pub use scorer::FixtureScorer;
pub use selection::{recommend, top_legs, Leg};
