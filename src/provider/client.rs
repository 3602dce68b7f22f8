use std::time::Duration;

use metrics::counter;
use reqwest::Client;
use thiserror::Error;

use crate::models::{Fixture, HeadToHead, InjuryReport, MatchOdds, ScoringInputs, TeamStatistics};

use super::types::{
    head_to_head_from_api, ApiEnvelope, ApiFixture, ApiH2hFixture, ApiInjury, ApiOdds,
    ApiTeamStats,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Client for the sports-data API. One instance is built at startup and
/// shared; each call is a single bounded request with no retries.
#[derive(Debug, Clone)]
pub struct SportsApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SportsApiClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ProviderError> {
        counter!("provider_requests_total").increment(1);

        let url = format!("{}/{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .header("x-apisports-key", &self.api_key)
            .query(query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ApiEnvelope<T> = resp.json().await?;
        Ok(envelope.response)
    }

    /// Fetch the next `count` fixtures for a league and season. Entries the
    /// provider returns without an id, kickoff, or either team are skipped.
    pub async fn upcoming_fixtures(
        &self,
        league_id: u32,
        season: u32,
        count: u32,
    ) -> Result<Vec<Fixture>, ProviderError> {
        let raw: Vec<ApiFixture> = self
            .get(
                "fixtures",
                &[
                    ("league", league_id.to_string()),
                    ("season", season.to_string()),
                    ("next", count.to_string()),
                ],
            )
            .await?;

        Ok(raw.into_iter().filter_map(ApiFixture::into_fixture).collect())
    }

    /// Match-winner odds for one fixture. A fixture with no priced market
    /// yields an incomplete `MatchOdds`, which the scorer treats as absent.
    pub async fn match_odds(&self, fixture_id: i64) -> Result<MatchOdds, ProviderError> {
        let raw: Vec<ApiOdds> = self
            .get("odds", &[("fixture", fixture_id.to_string())])
            .await?;

        Ok(raw
            .first()
            .map(ApiOdds::match_winner)
            .unwrap_or_default())
    }

    pub async fn team_statistics(
        &self,
        team_id: i64,
        league_id: u32,
        season: u32,
    ) -> Result<TeamStatistics, ProviderError> {
        let raw: Vec<ApiTeamStats> = self
            .get(
                "teams/statistics",
                &[
                    ("team", team_id.to_string()),
                    ("league", league_id.to_string()),
                    ("season", season.to_string()),
                ],
            )
            .await?;

        Ok(raw
            .into_iter()
            .next()
            .map(ApiTeamStats::into_statistics)
            .unwrap_or_default())
    }

    pub async fn injury_count(&self, team_id: i64, season: u32) -> Result<u32, ProviderError> {
        let raw: Vec<ApiInjury> = self
            .get(
                "injuries",
                &[("team", team_id.to_string()), ("season", season.to_string())],
            )
            .await?;

        Ok(raw.len() as u32)
    }

    /// Last meetings between the two sides, oriented to the current home
    /// team (most recent last).
    pub async fn head_to_head(
        &self,
        home_id: i64,
        away_id: i64,
    ) -> Result<HeadToHead, ProviderError> {
        let raw: Vec<ApiH2hFixture> = self
            .get(
                "fixtures/headtohead",
                &[("h2h", format!("{home_id}-{away_id}")), ("last", "5".into())],
            )
            .await?;

        Ok(head_to_head_from_api(raw, home_id))
    }

    /// Gather every scoring input for one fixture, sequentially. A failed
    /// sub-resource degrades to its neutral value and is logged; it never
    /// aborts the fixture.
    pub async fn scoring_inputs(
        &self,
        fixture: &Fixture,
        league_id: u32,
        season: u32,
    ) -> ScoringInputs {
        let odds = self
            .match_odds(fixture.id)
            .await
            .map_err(|e| degraded(fixture, "odds", e))
            .ok()
            .filter(MatchOdds::is_complete);

        let home_stats = self
            .team_statistics(fixture.home.id, league_id, season)
            .await
            .map_err(|e| degraded(fixture, "home statistics", e))
            .ok();

        let away_stats = self
            .team_statistics(fixture.away.id, league_id, season)
            .await
            .map_err(|e| degraded(fixture, "away statistics", e))
            .ok();

        let head_to_head = self
            .head_to_head(fixture.home.id, fixture.away.id)
            .await
            .map_err(|e| degraded(fixture, "head-to-head", e))
            .unwrap_or_default();

        let injuries = InjuryReport {
            home: self
                .injury_count(fixture.home.id, season)
                .await
                .map_err(|e| degraded(fixture, "home injuries", e))
                .unwrap_or(0),
            away: self
                .injury_count(fixture.away.id, season)
                .await
                .map_err(|e| degraded(fixture, "away injuries", e))
                .unwrap_or(0),
        };

        ScoringInputs {
            odds,
            home_stats,
            away_stats,
            head_to_head,
            injuries,
        }
    }
}

fn degraded(fixture: &Fixture, resource: &str, e: ProviderError) {
    counter!("provider_errors_total").increment(1);
    tracing::warn!(
        fixture = %fixture,
        error = %e,
        "{resource} unavailable, using neutral value"
    );
}
