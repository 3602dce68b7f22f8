pub mod fixture;
pub mod score;
pub mod stats;

pub use fixture::{Fixture, TeamRef};
pub use score::{FeatureBreakdown, Outcome, OutcomeRatings, ProbabilityTriple, Rating, ScoreRecord};
pub use stats::{HeadToHead, InjuryReport, MatchOdds, ScoringInputs, TeamStatistics};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FormOutcome
// ---------------------------------------------------------------------------

/// Result of a single past match, oriented to the team whose form string it
/// came from (or, for head-to-head sequences, to the current fixture's home
/// side). Most recent last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormOutcome {
    W,
    D,
    L,
}

impl FormOutcome {
    /// Parse one character of a provider form string such as "WDLWW".
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(FormOutcome::W),
            'D' => Some(FormOutcome::D),
            'L' => Some(FormOutcome::L),
            _ => None,
        }
    }

    /// Points value used by both the form and head-to-head features.
    pub fn points(&self) -> f64 {
        match self {
            FormOutcome::W => 1.0,
            FormOutcome::D => 0.5,
            FormOutcome::L => 0.0,
        }
    }
}

impl fmt::Display for FormOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormOutcome::W => write!(f, "W"),
            FormOutcome::D => write!(f, "D"),
            FormOutcome::L => write!(f, "L"),
        }
    }
}
