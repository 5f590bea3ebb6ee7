//! HTTP client for the remote problem service
//!
//! Binds the [`ProblemClient`] interface onto the problem service's REST
//! API: one HTTP call per method, no retries, no fallbacks. Failure policy
//! beyond the transport timeout belongs to the deployment, not this client.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, AppResult};
use crate::models::Problem;
use crate::services::ProblemClient;

/// Client for the problem service REST API
#[derive(Clone)]
pub struct ProblemServiceClient {
    base_url: String,
    http_client: Client,
}

impl ProblemServiceClient {
    /// Create a new problem service client
    ///
    /// `base_url` must not end with a slash (e.g.
    /// `http://localhost:8082/problem-api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-success downstream status into a `ProblemService` error.
async fn ensure_success(response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::ProblemService(format!(
        "Problem service returned {}: {}",
        status, body
    )))
}

#[async_trait]
impl ProblemClient for ProblemServiceClient {
    async fn add_problem(&self, problem: Problem) -> AppResult<Problem> {
        let url = self.endpoint("/problems");

        let response = self
            .http_client
            .post(&url)
            .json(&problem)
            .send()
            .await
            .map_err(|e| AppError::ProblemService(format!("Request failed: {}", e)))?;
        let response = ensure_success(response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::ProblemService(format!("Failed to parse response: {}", e)))
    }

    async fn update_problem(&self, problem: Problem) -> AppResult<()> {
        let url = self.endpoint("/problems");

        let response = self
            .http_client
            .put(&url)
            .json(&problem)
            .send()
            .await
            .map_err(|e| AppError::ProblemService(format!("Request failed: {}", e)))?;
        ensure_success(response).await?;

        Ok(())
    }

    async fn delete_problem(&self, problem_id: i32) -> AppResult<()> {
        let url = self.endpoint(&format!("/problems/problemId/{}", problem_id));

        let response = self
            .http_client
            .delete(&url)
            .send()
            .await
            .map_err(|e| AppError::ProblemService(format!("Request failed: {}", e)))?;
        ensure_success(response).await?;

        Ok(())
    }

    async fn get_all_problems(&self) -> AppResult<Vec<Problem>> {
        let url = self.endpoint("/problems");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ProblemService(format!("Request failed: {}", e)))?;
        let response = ensure_success(response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::ProblemService(format!("Failed to parse response: {}", e)))
    }

    async fn get_problems_by_farmer_id(&self, farmer_id: i32) -> AppResult<Vec<Problem>> {
        let url = self.endpoint(&format!("/problems/farmerId/{}", farmer_id));

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ProblemService(format!("Request failed: {}", e)))?;
        let response = ensure_success(response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::ProblemService(format!("Failed to parse response: {}", e)))
    }
}
