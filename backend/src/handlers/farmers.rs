//! Farmer record HTTP handlers
//!
//! Each handler forwards to the [`FarmerService`](crate::services::FarmerService)
//! collaborator and wraps the result in the operation's fixed response envelope.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use crate::error::AppResult;
use crate::models::Farmer;
use crate::routes::meta::GatewayOp;
use crate::AppState;

/// Register a new farmer record
pub async fn add_farmer(
    State(state): State<AppState>,
    Json(farmer): Json<Farmer>,
) -> AppResult<Response> {
    let created = state.farmers.add_farmer(farmer).await?;
    Ok(GatewayOp::AddFarmer.reply(created))
}

/// Update an existing farmer record
pub async fn update_farmer(
    State(state): State<AppState>,
    Json(farmer): Json<Farmer>,
) -> AppResult<Response> {
    state.farmers.update_farmer(farmer).await?;
    Ok(GatewayOp::UpdateFarmer.reply_empty())
}

/// Delete a farmer record by id
pub async fn delete_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<i32>,
) -> AppResult<Response> {
    state.farmers.delete_farmer(farmer_id).await?;
    Ok(GatewayOp::DeleteFarmer.reply_empty())
}

/// List farmers matching a gender
pub async fn get_by_gender(
    State(state): State<AppState>,
    Path(gender): Path<String>,
) -> AppResult<Response> {
    tracing::debug!("Fetching farmers by gender: {}", gender);
    let farmers = state.farmers.get_by_gender(&gender).await?;
    tracing::info!("Found {} farmers for gender {}", farmers.len(), gender);
    Ok(GatewayOp::FarmersByGender.reply(farmers))
}

/// List farmers matching an age
pub async fn get_by_age(
    State(state): State<AppState>,
    Path(age): Path<i32>,
) -> AppResult<Response> {
    tracing::debug!("Fetching farmers by age: {}", age);
    let farmers = state.farmers.get_by_age(age).await?;
    tracing::info!("Found {} farmers aged {}", farmers.len(), age);
    Ok(GatewayOp::FarmersByAge.reply(farmers))
}

/// Fetch a single farmer by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(farmer_id): Path<i32>,
) -> AppResult<Response> {
    tracing::debug!("Fetching farmer by id: {}", farmer_id);
    let farmer = state.farmers.get_by_id(farmer_id).await?;
    tracing::info!("Fetched farmer: {:?}", farmer);
    Ok(GatewayOp::FarmerById.reply(farmer))
}

/// List every farmer record
pub async fn get_all(State(state): State<AppState>) -> AppResult<Response> {
    let farmers = state.farmers.get_all().await?;
    Ok(GatewayOp::AllFarmers.reply(farmers))
}

/// List farmers matching a city
pub async fn get_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Response> {
    tracing::debug!("Fetching farmers by city: {}", city);
    let farmers = state.farmers.get_by_city(&city).await?;
    tracing::info!("Found {} farmers in {}", farmers.len(), city);
    Ok(GatewayOp::FarmersByCity.reply(farmers))
}

/// List farmers matching both a soil type and a city
pub async fn get_by_soil_city(
    State(state): State<AppState>,
    Path((soil, city)): Path<(String, String)>,
) -> AppResult<Response> {
    tracing::debug!("Fetching farmers by soil {} and city {}", soil, city);
    let farmers = state.farmers.get_by_soil_city(&soil, &city).await?;
    tracing::info!("Found {} farmers for soil {} in {}", farmers.len(), soil, city);
    Ok(GatewayOp::FarmersBySoilCity.reply(farmers))
}

/// List farmers matching a soil type
pub async fn get_by_soil(
    State(state): State<AppState>,
    Path(soil): Path<String>,
) -> AppResult<Response> {
    tracing::debug!("Fetching farmers by soil: {}", soil);
    let farmers = state.farmers.get_by_soil(&soil).await?;
    tracing::info!("Found {} farmers for soil {}", farmers.len(), soil);
    Ok(GatewayOp::FarmersBySoil.reply(farmers))
}
