//! Built-in sample dataset, used whenever no provider credential is
//! configured so every endpoint works offline. Teams and ids follow the
//! provider's Premier League numbering.

use chrono::{Duration, Utc};

use crate::models::{
    Fixture, HeadToHead, InjuryReport, MatchOdds, ScoringInputs, TeamRef, TeamStatistics,
};

struct SampleTeam {
    id: i64,
    name: &'static str,
    form: &'static str,
    rank: u32,
    goals_for: f64,
    goals_against: f64,
    injuries: u32,
}

struct SampleFixture {
    id: i64,
    days_ahead: i64,
    home: SampleTeam,
    away: SampleTeam,
    odds: (f64, f64, f64),
    /// Last meetings oriented to the home side, most recent last.
    h2h: &'static str,
}

fn stats(team: &SampleTeam) -> TeamStatistics {
    TeamStatistics {
        form: TeamStatistics::form_from_str(team.form),
        rank: Some(team.rank),
        avg_goals_for: Some(team.goals_for),
        avg_goals_against: Some(team.goals_against),
    }
}

impl SampleFixture {
    fn build(self) -> (Fixture, ScoringInputs) {
        let fixture = Fixture {
            id: self.id,
            kickoff: Utc::now() + Duration::days(self.days_ahead),
            home: TeamRef {
                id: self.home.id,
                name: self.home.name.into(),
            },
            away: TeamRef {
                id: self.away.id,
                name: self.away.name.into(),
            },
        };

        let inputs = ScoringInputs {
            odds: Some(MatchOdds {
                home: Some(self.odds.0),
                draw: Some(self.odds.1),
                away: Some(self.odds.2),
            }),
            home_stats: Some(stats(&self.home)),
            away_stats: Some(stats(&self.away)),
            head_to_head: HeadToHead {
                meetings: TeamStatistics::form_from_str(self.h2h),
            },
            injuries: InjuryReport {
                home: self.home.injuries,
                away: self.away.injuries,
            },
        };

        (fixture, inputs)
    }
}

/// Five upcoming Premier League fixtures with full scoring inputs.
pub fn sample_dataset() -> Vec<(Fixture, ScoringInputs)> {
    let fixtures = vec![
        SampleFixture {
            id: 1001,
            days_ahead: 1,
            home: SampleTeam {
                id: 40,
                name: "Liverpool",
                form: "WWWWD",
                rank: 2,
                goals_for: 2.3,
                goals_against: 0.9,
                injuries: 1,
            },
            away: SampleTeam {
                id: 35,
                name: "Bournemouth",
                form: "LWLLD",
                rank: 15,
                goals_for: 1.1,
                goals_against: 1.6,
                injuries: 3,
            },
            odds: (1.33, 5.25, 8.50),
            h2h: "WWDWW",
        },
        SampleFixture {
            id: 1002,
            days_ahead: 1,
            home: SampleTeam {
                id: 50,
                name: "Manchester City",
                form: "WWDWW",
                rank: 1,
                goals_for: 2.5,
                goals_against: 0.8,
                injuries: 2,
            },
            away: SampleTeam {
                id: 34,
                name: "Newcastle",
                form: "WDLWL",
                rank: 7,
                goals_for: 1.6,
                goals_against: 1.3,
                injuries: 2,
            },
            odds: (1.45, 4.60, 6.50),
            h2h: "WLWWD",
        },
        SampleFixture {
            id: 1003,
            days_ahead: 2,
            home: SampleTeam {
                id: 33,
                name: "Manchester United",
                form: "WDWLW",
                rank: 5,
                goals_for: 1.8,
                goals_against: 1.2,
                injuries: 2,
            },
            away: SampleTeam {
                id: 36,
                name: "Fulham",
                form: "DLWDL",
                rank: 11,
                goals_for: 1.3,
                goals_against: 1.4,
                injuries: 1,
            },
            odds: (1.60, 4.00, 5.50),
            h2h: "WDWLW",
        },
        SampleFixture {
            id: 1004,
            days_ahead: 2,
            home: SampleTeam {
                id: 66,
                name: "Aston Villa",
                form: "WLWDW",
                rank: 6,
                goals_for: 1.7,
                goals_against: 1.3,
                injuries: 3,
            },
            away: SampleTeam {
                id: 52,
                name: "Crystal Palace",
                form: "DWLDL",
                rank: 12,
                goals_for: 1.2,
                goals_against: 1.3,
                injuries: 2,
            },
            odds: (1.80, 3.80, 4.33),
            h2h: "DWLWD",
        },
        SampleFixture {
            id: 1005,
            days_ahead: 3,
            home: SampleTeam {
                id: 45,
                name: "Everton",
                form: "LDLWL",
                rank: 16,
                goals_for: 0.9,
                goals_against: 1.5,
                injuries: 4,
            },
            away: SampleTeam {
                id: 51,
                name: "Brighton",
                form: "WWDLW",
                rank: 8,
                goals_for: 1.7,
                goals_against: 1.2,
                injuries: 1,
            },
            odds: (3.60, 3.40, 2.10),
            h2h: "LDLWL",
        },
    ];

    fixtures.into_iter().map(SampleFixture::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_is_complete() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 5);
        for (fixture, inputs) in &dataset {
            assert!(fixture.kickoff > Utc::now());
            assert!(inputs.odds.map(|o| o.is_complete()).unwrap_or(false));
            assert_eq!(inputs.home_stats.as_ref().unwrap().form.len(), 5);
            assert_eq!(inputs.head_to_head.meetings.len(), 5);
        }
    }
}
