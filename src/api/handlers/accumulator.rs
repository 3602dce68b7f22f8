use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::scoring::{top_legs, Leg};
use crate::AppState;

use super::{load_records, ApiResponse};

const DEFAULT_LEGS: usize = 4;

#[derive(Deserialize)]
pub struct AccumulatorParams {
    pub legs: Option<usize>,
}

pub async fn legs(
    State(state): State<AppState>,
    Query(params): Query<AccumulatorParams>,
) -> Result<Json<ApiResponse<Vec<Leg>>>, AppError> {
    let n = params.legs.unwrap_or(DEFAULT_LEGS);
    if n == 0 {
        return Err(AppError::BadRequest("legs must be at least 1".into()));
    }

    let records = load_records(&state).await;
    let legs = top_legs(&records, n);

    if legs.is_empty() {
        return Ok(Json(ApiResponse::ok_with_message(
            Vec::new(),
            "no upcoming fixtures",
        )));
    }

    Ok(Json(ApiResponse::ok(legs)))
}
