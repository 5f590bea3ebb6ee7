//! Remote problem-service collaborator interface

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Problem;

/// Problem-records collaborator consumed by the gateway.
///
/// Problems live in a separate service; the gateway only ever sees this
/// interface. The HTTP binding is
/// [`crate::external::problems::ProblemServiceClient`].
#[async_trait]
pub trait ProblemClient: Send + Sync {
    async fn add_problem(&self, problem: Problem) -> AppResult<Problem>;
    async fn update_problem(&self, problem: Problem) -> AppResult<()>;
    async fn delete_problem(&self, problem_id: i32) -> AppResult<()>;
    async fn get_all_problems(&self) -> AppResult<Vec<Problem>>;
    async fn get_problems_by_farmer_id(&self, farmer_id: i32) -> AppResult<Vec<Problem>>;
}
