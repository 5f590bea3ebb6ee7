//! Problem forwarding HTTP handlers
//!
//! These routes proxy to the remote problem service through the
//! [`ProblemClient`](crate::services::ProblemClient) collaborator.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use crate::error::AppResult;
use crate::models::Problem;
use crate::routes::meta::GatewayOp;
use crate::AppState;

/// Forward a new problem report to the problem service
pub async fn add_problem(
    State(state): State<AppState>,
    Json(problem): Json<Problem>,
) -> AppResult<Response> {
    tracing::debug!("Forwarding new problem to problem service");
    let created = state.problems.add_problem(problem).await?;
    tracing::info!("Problem registered: {:?}", created.problem_id);
    Ok(GatewayOp::AddProblem.reply(created))
}

/// Forward a problem update to the problem service
pub async fn update_problem(
    State(state): State<AppState>,
    Json(problem): Json<Problem>,
) -> AppResult<Response> {
    state.problems.update_problem(problem).await?;
    Ok(GatewayOp::UpdateProblem.reply_empty())
}

/// Delete a problem by id on the problem service
pub async fn delete_problem(
    State(state): State<AppState>,
    Path(problem_id): Path<i32>,
) -> AppResult<Response> {
    state.problems.delete_problem(problem_id).await?;
    Ok(GatewayOp::DeleteProblem.reply_empty())
}

/// List every problem known to the problem service
pub async fn get_all_problems(State(state): State<AppState>) -> AppResult<Response> {
    let problems = state.problems.get_all_problems().await?;
    Ok(GatewayOp::AllProblems.reply(problems))
}

/// List the problems reported by one farmer
pub async fn get_problems_by_farmer_id(
    State(state): State<AppState>,
    Path(farmer_id): Path<i32>,
) -> AppResult<Response> {
    tracing::debug!("Fetching problems for farmer {}", farmer_id);
    let problems = state.problems.get_problems_by_farmer_id(farmer_id).await?;
    tracing::info!("Found {} problems for farmer {}", problems.len(), farmer_id);
    Ok(GatewayOp::ProblemsByFarmerId.reply(problems))
}
