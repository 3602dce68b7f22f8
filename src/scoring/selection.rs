use serde::{Deserialize, Serialize};

use crate::models::{Outcome, Rating, ScoreRecord};

/// A single selection within an accumulator: the most likely outcome of one
/// fixture, ranked by its adjusted probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    pub fixture_id: i64,
    pub fixture: String,
    pub kickoff: chrono::DateTime<chrono::Utc>,
    pub outcome: Outcome,
    pub probability: f64,
    pub rating: Rating,
}

impl Leg {
    fn from_record(record: &ScoreRecord) -> Self {
        let outcome = record.adjusted.best();
        let probability = record.adjusted.get(outcome);
        Self {
            fixture_id: record.fixture_id,
            fixture: format!("{} vs {}", record.home.name, record.away.name),
            kickoff: record.kickoff,
            outcome,
            probability,
            rating: Rating::from_probability(Some(probability)),
        }
    }
}

/// Records whose adjusted home-win probability meets the cutoff, in their
/// original order.
pub fn recommend(records: &[ScoreRecord], threshold: f64) -> Vec<ScoreRecord> {
    records
        .iter()
        .filter(|r| r.adjusted.home >= threshold)
        .cloned()
        .collect()
}

/// The top `n` legs by adjusted probability, descending. The sort is stable
/// so equal scores keep their fixture order.
pub fn top_legs(records: &[ScoreRecord], n: usize) -> Vec<Leg> {
    let mut legs: Vec<Leg> = records.iter().map(Leg::from_record).collect();
    legs.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    legs.truncate(n);
    legs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureBreakdown, ProbabilityTriple, TeamRef};
    use chrono::Utc;

    fn record(id: i64, home: f64, draw: f64, away: f64) -> ScoreRecord {
        let adjusted = ProbabilityTriple { home, draw, away };
        ScoreRecord {
            fixture_id: id,
            kickoff: Utc::now(),
            home: TeamRef {
                id,
                name: format!("Home {id}"),
            },
            away: TeamRef {
                id: id + 100,
                name: format!("Away {id}"),
            },
            baseline: adjusted,
            adjusted,
            ratings: adjusted.ratings(),
            features: FeatureBreakdown::default(),
        }
    }

    #[test]
    fn test_recommend_threshold() {
        let records: Vec<ScoreRecord> = vec![
            record(1, 73.1, 15.0, 11.9),
            record(2, 60.0, 25.0, 15.0),
            record(3, 59.9, 25.0, 15.1),
            record(4, 38.4, 30.0, 31.6),
            record(5, 68.8, 18.0, 13.2),
        ];
        let picks = recommend(&records, 60.0);
        let ids: Vec<i64> = picks.iter().map(|r| r.fixture_id).collect();
        // Qualifying records only, original order preserved.
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn test_recommend_empty() {
        assert!(recommend(&[], 60.0).is_empty());
    }

    #[test]
    fn test_leg_uses_best_outcome() {
        let records = vec![record(1, 20.0, 25.0, 55.0)];
        let legs = top_legs(&records, 1);
        assert_eq!(legs[0].outcome, Outcome::Away);
        assert!((legs[0].probability - 55.0).abs() < 1e-9);
        assert_eq!(legs[0].rating, Rating::Orange);
        assert_eq!(legs[0].fixture, "Home 1 vs Away 1");
    }

    #[test]
    fn test_top_legs_ordering_and_truncation() {
        let records = vec![
            record(1, 61.0, 20.0, 19.0),
            record(2, 75.0, 15.0, 10.0),
            record(3, 61.0, 20.0, 19.0),
            record(4, 50.0, 30.0, 20.0),
        ];
        let legs = top_legs(&records, 3);
        let ids: Vec<i64> = legs.iter().map(|l| l.fixture_id).collect();
        // Descending by probability; the 61.0 tie keeps fixture order.
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_top_legs_n_larger_than_input() {
        let records = vec![record(1, 61.0, 20.0, 19.0)];
        assert_eq!(top_legs(&records, 10).len(), 1);
    }
}
