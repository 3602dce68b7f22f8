//! Raw response shapes for the sports-data API.
//!
//! Every field is optional: the provider omits or nulls fields freely, and a
//! missing field must degrade the affected feature rather than fail the
//! request. Conversion helpers map each raw shape into the domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{Fixture, HeadToHead, MatchOdds, TeamRef, TeamStatistics};

/// Standard provider envelope: the payload always lives under `response`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFixture {
    #[serde(default)]
    pub fixture: Option<ApiFixtureMeta>,
    #[serde(default)]
    pub teams: Option<ApiTeams>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFixtureMeta {
    pub id: i64,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTeams {
    #[serde(default)]
    pub home: Option<ApiTeam>,
    #[serde(default)]
    pub away: Option<ApiTeam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTeam {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl ApiFixture {
    /// Build a domain fixture; entries missing an id, kickoff, or either
    /// team are skipped by the caller.
    pub fn into_fixture(self) -> Option<Fixture> {
        let meta = self.fixture?;
        let teams = self.teams?;
        let home = teams.home?;
        let away = teams.away?;
        Some(Fixture {
            id: meta.id,
            kickoff: meta.date?,
            home: TeamRef {
                id: home.id,
                name: home.name.unwrap_or_else(|| "Unknown".into()),
            },
            away: TeamRef {
                id: away.id,
                name: away.name.unwrap_or_else(|| "Unknown".into()),
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Odds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOdds {
    #[serde(default)]
    pub bookmakers: Vec<ApiBookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiBookmaker {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bets: Vec<ApiBet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiBet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub values: Vec<ApiOddValue>,
}

/// Decimal odds arrive as strings, e.g. `{"value": "Home", "odd": "1.50"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiOddValue {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub odd: Option<String>,
}

impl ApiOdds {
    /// Extract match-winner odds from the first bookmaker carrying that
    /// market. Any missing price leaves the corresponding field `None`.
    pub fn match_winner(&self) -> MatchOdds {
        let bet = self
            .bookmakers
            .iter()
            .flat_map(|b| b.bets.iter())
            .find(|bet| bet.name.as_deref() == Some("Match Winner"));

        let Some(bet) = bet else {
            return MatchOdds::default();
        };

        let price = |label: &str| -> Option<f64> {
            bet.values
                .iter()
                .find(|v| v.value.as_deref() == Some(label))
                .and_then(|v| v.odd.as_deref())
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|odd| *odd > 1.0)
        };

        MatchOdds {
            home: price("Home"),
            draw: price("Draw"),
            away: price("Away"),
        }
    }
}

// ---------------------------------------------------------------------------
// Team statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTeamStats {
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub goals: Option<ApiGoals>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiGoals {
    #[serde(rename = "for", default)]
    pub scored: Option<ApiGoalAverage>,
    #[serde(default)]
    pub against: Option<ApiGoalAverage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiGoalAverage {
    #[serde(default)]
    pub average: Option<String>,
}

impl ApiTeamStats {
    pub fn into_statistics(self) -> TeamStatistics {
        let avg = |side: &Option<ApiGoalAverage>| -> Option<f64> {
            side.as_ref()
                .and_then(|g| g.average.as_deref())
                .and_then(|s| s.parse::<f64>().ok())
        };

        let (for_avg, against_avg) = match &self.goals {
            Some(goals) => (avg(&goals.scored), avg(&goals.against)),
            None => (None, None),
        };

        TeamStatistics {
            form: self
                .form
                .as_deref()
                .map(TeamStatistics::form_from_str)
                .unwrap_or_default(),
            rank: self.rank,
            avg_goals_for: for_avg,
            avg_goals_against: against_avg,
        }
    }
}

// ---------------------------------------------------------------------------
// Injuries
// ---------------------------------------------------------------------------

/// One injured-player entry. Only the entry count feeds scoring, so the
/// payload itself is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiInjury {}

// ---------------------------------------------------------------------------
// Head-to-head
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ApiH2hFixture {
    #[serde(default)]
    pub teams: Option<ApiTeams>,
    #[serde(default)]
    pub goals: Option<ApiH2hGoals>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiH2hGoals {
    #[serde(default)]
    pub home: Option<i64>,
    #[serde(default)]
    pub away: Option<i64>,
}

/// Orient past meetings to whichever side is at home in the current
/// fixture. Meetings missing a final score or either team are skipped.
pub fn head_to_head_from_api(meetings: Vec<ApiH2hFixture>, current_home_id: i64) -> HeadToHead {
    use crate::models::FormOutcome;

    let outcomes = meetings
        .into_iter()
        .filter_map(|m| {
            let teams = m.teams?;
            let goals = m.goals?;
            let past_home_id = teams.home?.id;
            let past_away_id = teams.away?.id;
            let (gh, ga) = (goals.home?, goals.away?);

            let winner_id = match gh.cmp(&ga) {
                std::cmp::Ordering::Greater => Some(past_home_id),
                std::cmp::Ordering::Less => Some(past_away_id),
                std::cmp::Ordering::Equal => None,
            };

            Some(match winner_id {
                None => FormOutcome::D,
                Some(id) if id == current_home_id => FormOutcome::W,
                Some(_) => FormOutcome::L,
            })
        })
        .collect();

    HeadToHead { meetings: outcomes }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
