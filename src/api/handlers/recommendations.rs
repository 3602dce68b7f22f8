use axum::extract::State;
use axum::response::Html;
use axum::Json;
use metrics::counter;

use crate::api::html::render_table;
use crate::models::ScoreRecord;
use crate::scoring::recommend;
use crate::AppState;

use super::{load_records, ApiResponse};

pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<ScoreRecord>>> {
    let records = load_records(&state).await;
    let picks = recommend(&records, state.config.recommend_threshold);
    counter!("recommendations_served_total").increment(1);

    if picks.is_empty() {
        return Json(ApiResponse::ok_with_message(
            Vec::new(),
            "no fixtures above threshold",
        ));
    }

    Json(ApiResponse::ok(picks))
}

/// Browser view: every upcoming fixture with its color rating, not just the
/// ones passing the threshold.
pub async fn table(State(state): State<AppState>) -> Html<String> {
    let records = load_records(&state).await;
    counter!("recommendations_served_total").increment(1);
    Html(render_table(&records))
}
