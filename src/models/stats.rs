use serde::{Deserialize, Serialize};

use super::FormOutcome;

/// Season statistics for one team. Every field the provider may omit is
/// optional; absence degrades the corresponding feature to neutral.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamStatistics {
    /// Recent results, most recent last.
    pub form: Vec<FormOutcome>,
    /// League table position, lower = better placed.
    pub rank: Option<u32>,
    pub avg_goals_for: Option<f64>,
    pub avg_goals_against: Option<f64>,
}

impl TeamStatistics {
    /// Parse a provider form string such as "WDLWW" (unknown characters are
    /// dropped, e.g. separators in "W-D-L").
    pub fn form_from_str(s: &str) -> Vec<FormOutcome> {
        s.chars().filter_map(FormOutcome::from_char).collect()
    }
}

/// Decimal match-winner odds. A missing price for any outcome voids the
/// whole market for this fixture.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchOdds {
    pub home: Option<f64>,
    pub draw: Option<f64>,
    pub away: Option<f64>,
}

impl MatchOdds {
    pub fn is_complete(&self) -> bool {
        self.home.is_some() && self.draw.is_some() && self.away.is_some()
    }
}

/// Past meetings between the two sides, each outcome oriented to whichever
/// team is at home in the *current* fixture. Most recent last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadToHead {
    pub meetings: Vec<FormOutcome>,
}

impl HeadToHead {
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

/// Injured-player counts per side. Missing provider data shows up as zero,
/// which is the neutral penalty.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InjuryReport {
    pub home: u32,
    pub away: u32,
}

/// Everything the scorer consumes for one fixture besides the fixture
/// itself. Each part is independently optional; `Default` is the fully
/// degraded case where every feature sits at neutral.
#[derive(Debug, Clone, Default)]
pub struct ScoringInputs {
    pub odds: Option<MatchOdds>,
    pub home_stats: Option<TeamStatistics>,
    pub away_stats: Option<TeamStatistics>,
    pub head_to_head: HeadToHead,
    pub injuries: InjuryReport,
}
