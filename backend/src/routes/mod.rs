//! Route definitions for the farmer gateway
//!
//! The fifteen `/farmer-api` operations and their fixed response metadata.
//! Paths, methods, statuses and `desc` values are a published contract;
//! see [`meta`] for the full table.

pub mod meta;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::{handlers, AppState};

/// Create the `/farmer-api` routes
pub fn farmer_api_routes() -> Router<AppState> {
    Router::new()
        // Problem forwarding (remote problem service)
        .nest("/farmers/problems", problem_routes())
        // Farmer records (local farmer service)
        .nest("/farmers", farmer_routes())
}

/// Farmer record routes
fn farmer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::get_all)
                .post(handlers::add_farmer)
                .put(handlers::update_farmer),
        )
        .route(
            "/farmerId/:farmer_id",
            get(handlers::get_by_id).delete(handlers::delete_farmer),
        )
        .route("/gender/:gender", get(handlers::get_by_gender))
        .route("/age/:age", get(handlers::get_by_age))
        .route("/city/:city", get(handlers::get_by_city))
        .route("/soil/:soil/city/:city", get(handlers::get_by_soil_city))
        .route("/soil/:soil", get(handlers::get_by_soil))
}

/// Problem forwarding routes
fn problem_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::get_all_problems)
                .post(handlers::add_problem)
                .put(handlers::update_problem),
        )
        .route("/problemId/:problem_id", delete(handlers::delete_problem))
        .route("/farmerId/:farmer_id", get(handlers::get_problems_by_farmer_id))
}
