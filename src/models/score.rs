use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TeamRef;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// One of the three match-winner outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Home => "home",
            Outcome::Draw => "draw",
            Outcome::Away => "away",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProbabilityTriple
// ---------------------------------------------------------------------------

/// Outcome probabilities in percent. Invariant: components lie in [0, 100]
/// and sum to 100 within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl ProbabilityTriple {
    /// The default when no complete market is available.
    pub fn equal_split() -> Self {
        Self {
            home: 33.3,
            draw: 33.3,
            away: 33.3,
        }
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    /// Scale all components so the triple sums to exactly 100, correcting
    /// rounding drift. A degenerate all-zero triple becomes an equal split.
    pub fn renormalized(&self) -> Self {
        let total = self.sum();
        if total <= f64::EPSILON {
            return Self::equal_split().renormalized();
        }
        Self {
            home: self.home / total * 100.0,
            draw: self.draw / total * 100.0,
            away: self.away / total * 100.0,
        }
    }

    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    /// The most likely outcome. Ties resolve home, then draw, matching the
    /// declaration order of `Outcome`.
    pub fn best(&self) -> Outcome {
        let mut best = Outcome::Home;
        for outcome in [Outcome::Draw, Outcome::Away] {
            if self.get(outcome) > self.get(best) {
                best = outcome;
            }
        }
        best
    }

    pub fn ratings(&self) -> OutcomeRatings {
        OutcomeRatings {
            home: Rating::from_probability(Some(self.home)),
            draw: Rating::from_probability(Some(self.draw)),
            away: Rating::from_probability(Some(self.away)),
        }
    }
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Color classification of a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// p < 40 — unlikely.
    Red,
    /// 40 <= p <= 60 — uncertain.
    Orange,
    /// p > 60 — likely.
    Green,
    /// No probability available.
    Gray,
}

impl Rating {
    pub fn from_probability(p: Option<f64>) -> Self {
        match p {
            None => Rating::Gray,
            Some(p) if p < 40.0 => Rating::Red,
            Some(p) if p <= 60.0 => Rating::Orange,
            Some(_) => Rating::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Red => "red",
            Rating::Orange => "orange",
            Rating::Green => "green",
            Rating::Gray => "gray",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutcomeRatings {
    pub home: Rating,
    pub draw: Rating,
    pub away: Rating,
}

// ---------------------------------------------------------------------------
// FeatureBreakdown / ScoreRecord
// ---------------------------------------------------------------------------

/// Raw feature adjustments that went into the tilt, kept on the record so
/// callers can see why a fixture scored the way it did.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FeatureBreakdown {
    pub form: f64,
    pub table: f64,
    pub goals: f64,
    pub head_to_head: f64,
    pub injuries: f64,
    pub expected_goals: f64,
    pub tilt: f64,
}

/// Scorer output for one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub fixture_id: i64,
    pub kickoff: DateTime<Utc>,
    pub home: TeamRef,
    pub away: TeamRef,
    pub baseline: ProbabilityTriple,
    pub adjusted: ProbabilityTriple,
    pub ratings: OutcomeRatings,
    pub features: FeatureBreakdown,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
