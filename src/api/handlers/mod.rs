pub mod accumulator;
pub mod fixtures;
pub mod ops;
pub mod recommendations;

use metrics::counter;
use serde::Serialize;

use crate::models::ScoreRecord;
use crate::provider::sample_dataset;
use crate::scoring::FixtureScorer;
use crate::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }
}

/// Fetch and score the upcoming fixtures. With a provider configured the
/// sub-resources are gathered sequentially per fixture; without one the
/// built-in sample dataset is scored. A provider failure on the fixture
/// list itself yields an empty result, not an error response.
pub(crate) async fn load_records(state: &AppState) -> Vec<ScoreRecord> {
    let scorer = FixtureScorer::new(state.config.weights);
    let league = state.config.league_id;
    let season = state.config.season;

    let records: Vec<ScoreRecord> = match &state.provider {
        Some(client) => {
            let fixtures = match client
                .upcoming_fixtures(league, season, state.config.lookahead)
                .await
            {
                Ok(fixtures) => fixtures,
                Err(e) => {
                    counter!("provider_errors_total").increment(1);
                    tracing::error!(error = %e, "fixture list unavailable");
                    return Vec::new();
                }
            };

            let mut records = Vec::with_capacity(fixtures.len());
            for fixture in &fixtures {
                let inputs = client.scoring_inputs(fixture, league, season).await;
                records.push(scorer.score(fixture, &inputs));
            }
            records
        }
        None => sample_dataset()
            .iter()
            .map(|(fixture, inputs)| scorer.score(fixture, inputs))
            .collect(),
    };

    counter!("fixtures_scored_total").increment(records.len() as u64);
    records
}
