//! Feature extraction for the fixture scorer. Every function is pure,
//! returns a bounded value, and maps missing input to its neutral value.

use crate::models::{FormOutcome, HeadToHead, InjuryReport, TeamStatistics};

/// How many recent results and past meetings feed the form and
/// head-to-head features.
pub const WINDOW: usize = 5;

/// Cap on the per-side injury penalty.
const MAX_INJURY_PENALTY: f64 = 0.10;
const PENALTY_PER_INJURY: f64 = 0.01;

/// Average points over the last `WINDOW` results: W=1.0, D=0.5, L=0.0.
/// An empty sequence sits at the neutral midpoint.
pub fn form_score(form: &[FormOutcome]) -> f64 {
    let start = form.len().saturating_sub(WINDOW);
    let recent = &form[start..];
    if recent.is_empty() {
        return 0.5;
    }
    recent.iter().map(FormOutcome::points).sum::<f64>() / recent.len() as f64
}

/// Home form minus away form, in [-1, 1]. A side with no statistics at all
/// contributes the neutral midpoint.
pub fn form_adjustment(home: Option<&TeamStatistics>, away: Option<&TeamStatistics>) -> f64 {
    let score = |stats: Option<&TeamStatistics>| match stats {
        Some(s) => form_score(&s.form),
        None => 0.5,
    };
    score(home) - score(away)
}

/// `(away_rank - home_rank) / 10`, clamped to [-1, 1]. A better-placed
/// (numerically lower) home rank tilts toward home. Zero if either rank is
/// absent.
pub fn table_gap(home_rank: Option<u32>, away_rank: Option<u32>) -> f64 {
    match (home_rank, away_rank) {
        (Some(home), Some(away)) => ((away as f64 - home as f64) / 10.0).clamp(-1.0, 1.0),
        _ => 0.0,
    }
}

/// Difference of per-match goal differentials, halved and clamped to
/// [-1, 1]. Missing averages count as zero.
pub fn goal_differential(home: Option<&TeamStatistics>, away: Option<&TeamStatistics>) -> f64 {
    let diff = |stats: Option<&TeamStatistics>| -> f64 {
        let scored = stats.and_then(|s| s.avg_goals_for).unwrap_or(0.0);
        let conceded = stats.and_then(|s| s.avg_goals_against).unwrap_or(0.0);
        scored - conceded
    };
    ((diff(home) - diff(away)) / 2.0).clamp(-1.0, 1.0)
}

/// Average points for the current home side over the last `WINDOW`
/// meetings, mapped from [0, 1] onto [-1, 1]. Zero with no history.
pub fn head_to_head_tilt(h2h: &HeadToHead) -> f64 {
    if h2h.is_empty() {
        return 0.0;
    }
    let avg = form_score(&h2h.meetings);
    (avg - 0.5) * 2.0
}

/// Symmetric per-side penalty: one percentage point of tilt per injured
/// player, capped at ten.
pub fn injury_penalty(injured: u32) -> f64 {
    (injured as f64 * PENALTY_PER_INJURY).min(MAX_INJURY_PENALTY)
}

/// Net injury adjustment: home injuries lower the tilt, away injuries
/// raise it.
pub fn injury_adjustment(report: InjuryReport) -> f64 {
    injury_penalty(report.away) - injury_penalty(report.home)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
