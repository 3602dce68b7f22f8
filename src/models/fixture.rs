use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimal team descriptor carried through scoring and into responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
}

/// An upcoming match, as supplied by the data provider (or the sample set).
/// Constructed per request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: i64,
    pub kickoff: DateTime<Utc>,
    pub home: TeamRef,
    pub away: TeamRef,
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} ({})",
            self.home.name,
            self.away.name,
            self.kickoff.format("%Y-%m-%d %H:%M")
        )
    }
}
