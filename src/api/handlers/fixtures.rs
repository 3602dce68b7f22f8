use axum::extract::State;
use axum::Json;

use crate::models::ScoreRecord;
use crate::AppState;

use super::{load_records, ApiResponse};

pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<ScoreRecord>>> {
    let records = load_records(&state).await;

    if records.is_empty() {
        return Json(ApiResponse::ok_with_message(
            Vec::new(),
            "no upcoming fixtures",
        ));
    }

    Json(ApiResponse::ok(records))
}
