//! Request handlers.
//!
//! All six endpoints share one handler, instantiated per request DTO. The
//! DTO is converted into a [`Calculation`] and evaluated by calc_core on the
//! blocking pool, since a prime check near the input cap runs for a noticeable
//! fraction of a second.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use calc_core::{CalcError, Calculation, CalculationOutput};

use super::error::ApiError;
use super::AppState;

pub async fn handle_calculation<T>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<CalculationOutput>, ApiError>
where
    T: DeserializeOwned + TryInto<Calculation, Error = CalcError>,
{
    let Json(request) = payload?;
    let calculation: Calculation = request.try_into()?;

    debug!(calculation = calculation.calc_type(), "evaluating");
    let (calculation, output) = tokio::task::spawn_blocking(move || {
        let output = calculation.evaluate();
        (calculation, output)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    let output = output?;
    state.storage.record(&calculation, &output);

    Ok(Json(output))
}
