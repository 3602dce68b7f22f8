use std::env;

const DEFAULT_API_URL: &str = "https://v3.football.api-sports.io";

/// Immutable per-feature weights for the fixture scorer.
///
/// The odds weight is the baseline's share of the vector and is never
/// applied as a tilt term; the remaining weights scale the five adjustment
/// features. All seven sum to 1.0 by default.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub odds: f64,
    pub form: f64,
    pub table: f64,
    pub goals: f64,
    pub head_to_head: f64,
    pub injuries: f64,
    /// Reserved extension point; zero until an xG source is wired in.
    pub expected_goals: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            odds: 0.40,
            form: 0.20,
            table: 0.10,
            goals: 0.10,
            head_to_head: 0.10,
            injuries: 0.10,
            expected_goals: 0.0,
        }
    }
}

impl ScoringWeights {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            odds: env_f64("WEIGHT_ODDS", defaults.odds),
            form: env_f64("WEIGHT_FORM", defaults.form),
            table: env_f64("WEIGHT_TABLE", defaults.table),
            goals: env_f64("WEIGHT_GOALS", defaults.goals),
            head_to_head: env_f64("WEIGHT_H2H", defaults.head_to_head),
            injuries: env_f64("WEIGHT_INJURIES", defaults.injuries),
            expected_goals: env_f64("WEIGHT_XG", defaults.expected_goals),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Sports API credential (optional — absent means sample mode)
    pub sports_api_key: Option<String>,
    pub sports_api_url: String,

    // League context
    pub league_id: u32,
    pub season: u32,
    pub lookahead: u32,

    // Scoring
    pub recommend_threshold: f64,
    pub weights: ScoringWeights,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            sports_api_key: env::var("SPORTS_API_KEY").ok().filter(|k| !k.is_empty()),
            sports_api_url: env::var("SPORTS_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.into()),

            league_id: env::var("LEAGUE_ID")
                .unwrap_or_else(|_| "39".into())
                .parse()
                .unwrap_or(39),
            season: env::var("SEASON")
                .unwrap_or_else(|_| "2025".into())
                .parse()
                .unwrap_or(2025),
            lookahead: env::var("LOOKAHEAD")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .unwrap_or(10),

            recommend_threshold: env_f64("RECOMMEND_THRESHOLD", 60.0),
            weights: ScoringWeights::from_env(),
        })
    }

    /// Returns true if a provider credential is configured.
    pub fn has_sports_api_key(&self) -> bool {
        self.sports_api_key.is_some()
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
