//! Endpoint handlers.
//!
//! Each handler is a short synchronous computation under the explorer lock.
//! File writes run after the lock is released.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use coalition::{CoalitionQuery, ConstraintSet};
use tracing::{debug, warn};

use crate::api::types::*;
use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// GET /api/initialize
pub async fn initialize(State(state): State<AppState>) -> ApiResult<InitializeResponse> {
    let explorer = state.explorer().read();
    let active = explorer.active();

    Ok(Json(InitializeResponse {
        success: true,
        parties: party_views(active),
        total_seats: active.total_seats(),
        polls: explorer.datasets().into_iter().map(|d| d.name).collect(),
        current_poll: active.name().to_string(),
    }))
}

/// POST /api/change_poll
pub async fn change_poll(
    State(state): State<AppState>,
    payload: Result<Json<ChangePollRequest>, JsonRejection>,
) -> ApiResult<ChangePollResponse> {
    let Json(req) = payload?;
    let mut explorer = state.explorer().write();
    let dataset = explorer.load(&req.poll_name)?;

    Ok(Json(ChangePollResponse {
        success: true,
        parties: party_views(dataset),
        total_seats: dataset.total_seats(),
    }))
}

/// POST /api/update_position
pub async fn update_position(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePositionRequest>, JsonRejection>,
) -> ApiResult<UpdatePositionResponse> {
    let Json(req) = payload?;
    let (snapshot, parties) = {
        let mut explorer = state.explorer().write();
        explorer.update_position(&req.party_name, req.economic, req.social)?;
        let snapshot = state
            .positions()
            .map(|store| (store.next_revision(), explorer.registry().overrides().clone()));
        (snapshot, party_views(explorer.active()))
    };

    if let (Some(store), Some((revision, overrides))) = (state.positions(), snapshot) {
        let store = Arc::clone(store);
        let path = store.path().to_path_buf();
        match tokio::task::spawn_blocking(move || store.save_revision(revision, &overrides)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!(error = %e, path = %path.display(), "failed to save positions"),
            Err(e) => warn!(error = %e, path = %path.display(), "position save task failed"),
        }
    }

    Ok(Json(UpdatePositionResponse {
        success: true,
        parties,
    }))
}

/// POST /api/coalitions
pub async fn coalitions(
    State(state): State<AppState>,
    payload: Result<Json<CoalitionsRequest>, JsonRejection>,
) -> ApiResult<CoalitionsResponse> {
    let Json(req) = payload?;
    let constraints = ConstraintSet::from_lists(&req.exclusions, &req.inclusions)?;

    let mut query =
        CoalitionQuery::new(req.min_parties, req.max_parties).with_constraints(constraints);
    query.majority_only = req.majority_only;
    query.limit = req.limit;

    let result = state.explorer().read().query(&query)?;
    debug!(
        event = "coalitions_served",
        returned = result.coalitions.len(),
        total_count = result.total_count,
    );

    Ok(Json(CoalitionsResponse {
        success: true,
        coalitions: result.coalitions.iter().map(CoalitionView::from).collect(),
        total_count: result.total_count,
    }))
}

/// POST /api/select_coalition
pub async fn select_coalition(
    State(state): State<AppState>,
    payload: Result<Json<SelectCoalitionRequest>, JsonRejection>,
) -> ApiResult<SelectCoalitionResponse> {
    let Json(req) = payload?;
    let mut explorer = state.explorer().write();
    let selected = explorer.select(req.parties.as_slice())?;

    Ok(Json(SelectCoalitionResponse {
        success: true,
        parties: explorer.selection().to_vec(),
        coalition_seats: selected.seats,
        has_majority: selected.is_majority,
    }))
}
