use crate::config::ScoringWeights;
use crate::models::{
    FeatureBreakdown, Fixture, MatchOdds, ProbabilityTriple, ScoreRecord, ScoringInputs,
};

use super::features;

/// Maximum magnitude of the composite tilt.
const TILT_CLAMP: f64 = 0.5;

/// Weighted-sum heuristic over a fixture's market odds and team data.
///
/// The market baseline carries the odds weight implicitly; the remaining
/// feature weights shape the tilt that is applied on top of it.
#[derive(Debug, Clone, Copy)]
pub struct FixtureScorer {
    weights: ScoringWeights,
}

impl FixtureScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score one fixture. Never fails: every missing input degrades to its
    /// neutral value.
    pub fn score(&self, fixture: &Fixture, inputs: &ScoringInputs) -> ScoreRecord {
        let baseline = baseline_probabilities(inputs.odds.as_ref());

        let home_stats = inputs.home_stats.as_ref();
        let away_stats = inputs.away_stats.as_ref();

        let mut breakdown = FeatureBreakdown {
            form: features::form_adjustment(home_stats, away_stats),
            table: features::table_gap(
                home_stats.and_then(|s| s.rank),
                away_stats.and_then(|s| s.rank),
            ),
            goals: features::goal_differential(home_stats, away_stats),
            head_to_head: features::head_to_head_tilt(&inputs.head_to_head),
            injuries: features::injury_adjustment(inputs.injuries),
            // Reserved: populated once an xG source exists.
            expected_goals: 0.0,
            tilt: 0.0,
        };

        let w = &self.weights;
        breakdown.tilt = (w.form * breakdown.form
            + w.table * breakdown.table
            + w.goals * breakdown.goals
            + w.head_to_head * breakdown.head_to_head
            + w.injuries * breakdown.injuries
            + w.expected_goals * breakdown.expected_goals)
            .clamp(-TILT_CLAMP, TILT_CLAMP);

        let adjusted = apply_tilt(baseline, breakdown.tilt);

        ScoreRecord {
            fixture_id: fixture.id,
            kickoff: fixture.kickoff,
            home: fixture.home.clone(),
            away: fixture.away.clone(),
            baseline,
            adjusted,
            ratings: adjusted.ratings(),
            features: breakdown,
        }
    }
}

/// Implied probabilities (`100 / odds`) when a complete market is priced;
/// the equal-split default otherwise. Always renormalized to sum 100.
fn baseline_probabilities(odds: Option<&MatchOdds>) -> ProbabilityTriple {
    let implied = odds.and_then(|odds| match (odds.home, odds.draw, odds.away) {
        (Some(h), Some(d), Some(a)) if h > 0.0 && d > 0.0 && a > 0.0 => Some(ProbabilityTriple {
            home: 100.0 / h,
            draw: 100.0 / d,
            away: 100.0 / a,
        }),
        _ => None,
    });

    implied
        .unwrap_or_else(ProbabilityTriple::equal_split)
        .renormalized()
}

/// Scale home by `1 + tilt` and away by `1 - tilt`; the draw takes the
/// remainder to 100 floored at zero, then the triple is renormalized to
/// correct rounding drift.
fn apply_tilt(baseline: ProbabilityTriple, tilt: f64) -> ProbabilityTriple {
    let home = baseline.home * (1.0 + tilt);
    let away = baseline.away * (1.0 - tilt);
    let draw = (100.0 - home - away).max(0.0);

    ProbabilityTriple { home, draw, away }.renormalized()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FormOutcome, HeadToHead, InjuryReport, TeamRef, TeamStatistics,
    };
    use chrono::Utc;

    fn fixture() -> Fixture {
        Fixture {
            id: 1,
            kickoff: Utc::now(),
            home: TeamRef {
                id: 10,
                name: "Home FC".into(),
            },
            away: TeamRef {
                id: 20,
                name: "Away FC".into(),
            },
        }
    }

    fn odds(home: f64, draw: f64, away: f64) -> MatchOdds {
        MatchOdds {
            home: Some(home),
            draw: Some(draw),
            away: Some(away),
        }
    }

    fn assert_valid_triple(triple: ProbabilityTriple) {
        assert!(
            (triple.sum() - 100.0).abs() < 0.01,
            "triple sums to {}",
            triple.sum()
        );
        for p in [triple.home, triple.draw, triple.away] {
            assert!((0.0..=100.0).contains(&p), "component {p} out of range");
        }
    }

    #[test]
    fn test_implied_probabilities_renormalized() {
        let baseline = baseline_probabilities(Some(&odds(1.50, 4.00, 6.00)));
        // Raw implied: 66.7 / 25.0 / 16.7, proportionally rescaled.
        assert_valid_triple(baseline);
        assert!((baseline.home - 61.54).abs() < 0.01);
        assert!((baseline.draw - 23.08).abs() < 0.01);
        assert!((baseline.away - 15.38).abs() < 0.01);
    }

    #[test]
    fn test_missing_odds_default_to_equal_split() {
        let incomplete = MatchOdds {
            home: Some(1.50),
            draw: None,
            away: Some(6.00),
        };
        for case in [None, Some(&incomplete)] {
            let baseline = baseline_probabilities(case);
            assert_valid_triple(baseline);
            assert!((baseline.home - baseline.draw).abs() < 1e-9);
            assert!((baseline.draw - baseline.away).abs() < 1e-9);
        }
    }

    #[test]
    fn test_neutral_inputs_leave_baseline_untouched() {
        let scorer = FixtureScorer::new(ScoringWeights::default());
        let inputs = ScoringInputs {
            odds: Some(odds(2.00, 3.50, 3.80)),
            ..Default::default()
        };
        let record = scorer.score(&fixture(), &inputs);
        assert_eq!(record.features.tilt, 0.0);
        assert!((record.adjusted.home - record.baseline.home).abs() < 1e-9);
        assert_valid_triple(record.adjusted);
    }

    #[test]
    fn test_adjusted_triple_always_valid() {
        let scorer = FixtureScorer::new(ScoringWeights::default());
        let strong = TeamStatistics {
            form: TeamStatistics::form_from_str("WWWWW"),
            rank: Some(1),
            avg_goals_for: Some(3.0),
            avg_goals_against: Some(0.5),
        };
        let weak = TeamStatistics {
            form: TeamStatistics::form_from_str("LLLLL"),
            rank: Some(20),
            avg_goals_for: Some(0.4),
            avg_goals_against: Some(2.8),
        };
        let inputs = ScoringInputs {
            odds: Some(odds(1.10, 9.00, 26.00)),
            home_stats: Some(strong),
            away_stats: Some(weak),
            head_to_head: HeadToHead {
                meetings: vec![FormOutcome::W; 5],
            },
            injuries: InjuryReport { home: 0, away: 12 },
        };
        let record = scorer.score(&fixture(), &inputs);
        assert_valid_triple(record.adjusted);
        assert!(record.adjusted.home > record.baseline.home * 0.99);
    }

    #[test]
    fn test_tilt_is_clamped() {
        // Exaggerated weights force every adjustment to its extreme.
        let weights = ScoringWeights {
            odds: 0.0,
            form: 10.0,
            table: 10.0,
            goals: 10.0,
            head_to_head: 10.0,
            injuries: 10.0,
            expected_goals: 0.0,
        };
        let scorer = FixtureScorer::new(weights);
        let dominant = TeamStatistics {
            form: TeamStatistics::form_from_str("WWWWW"),
            rank: Some(1),
            avg_goals_for: Some(4.0),
            avg_goals_against: Some(0.2),
        };
        let hopeless = TeamStatistics {
            form: TeamStatistics::form_from_str("LLLLL"),
            rank: Some(20),
            avg_goals_for: Some(0.2),
            avg_goals_against: Some(3.5),
        };
        let inputs = ScoringInputs {
            odds: None,
            home_stats: Some(dominant),
            away_stats: Some(hopeless),
            head_to_head: HeadToHead {
                meetings: vec![FormOutcome::W; 5],
            },
            injuries: InjuryReport { home: 0, away: 20 },
        };
        let record = scorer.score(&fixture(), &inputs);
        assert!((record.features.tilt - 0.5).abs() < 1e-9);
        assert_valid_triple(record.adjusted);
    }

    #[test]
    fn test_fully_degraded_inputs() {
        let scorer = FixtureScorer::new(ScoringWeights::default());
        let record = scorer.score(&fixture(), &ScoringInputs::default());
        assert_valid_triple(record.baseline);
        assert_valid_triple(record.adjusted);
        assert_eq!(record.features.tilt, 0.0);
        // Equal split renormalizes to a three-way 33.33.
        assert!((record.adjusted.home - 100.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_draw_floor_at_zero() {
        // A huge tilt on a home-heavy baseline pushes home + away past 100;
        // the draw must floor at zero, not go negative.
        let adjusted = apply_tilt(
            ProbabilityTriple {
                home: 70.0,
                draw: 20.0,
                away: 10.0,
            },
            0.5,
        );
        assert!(adjusted.draw >= 0.0);
        assert!((adjusted.sum() - 100.0).abs() < 0.01);
    }
}
