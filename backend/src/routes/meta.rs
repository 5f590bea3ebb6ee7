//! Per-operation response metadata
//!
//! Every gateway route answers with a fixed success status and a fixed
//! `desc` header. Both live here in one table so the mapping stays auditable
//! instead of being scattered through the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Name of the descriptive header attached to every gateway response.
pub const DESC_HEADER: &str = "desc";

/// The fifteen operations the gateway exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    AddFarmer,
    UpdateFarmer,
    DeleteFarmer,
    FarmersByGender,
    FarmersByAge,
    FarmerById,
    AllFarmers,
    FarmersByCity,
    FarmersBySoilCity,
    FarmersBySoil,
    AddProblem,
    UpdateProblem,
    DeleteProblem,
    AllProblems,
    ProblemsByFarmerId,
}

/// Protocol metadata for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub status: StatusCode,
    pub desc: &'static str,
}

impl GatewayOp {
    pub const ALL: [GatewayOp; 15] = [
        GatewayOp::AddFarmer,
        GatewayOp::UpdateFarmer,
        GatewayOp::DeleteFarmer,
        GatewayOp::FarmersByGender,
        GatewayOp::FarmersByAge,
        GatewayOp::FarmerById,
        GatewayOp::AllFarmers,
        GatewayOp::FarmersByCity,
        GatewayOp::FarmersBySoilCity,
        GatewayOp::FarmersBySoil,
        GatewayOp::AddProblem,
        GatewayOp::UpdateProblem,
        GatewayOp::DeleteProblem,
        GatewayOp::AllProblems,
        GatewayOp::ProblemsByFarmerId,
    ];

    /// Status code and `desc` value for this operation.
    ///
    /// Statuses and strings are the published contract of the original
    /// service, reproduced byte-for-byte — typos, trailing whitespace and
    /// uneven status codes included. Do not normalize them.
    pub fn meta(self) -> RouteMeta {
        let (status, desc) = match self {
            GatewayOp::AddFarmer => (StatusCode::ACCEPTED, "New farmer addded"),
            GatewayOp::UpdateFarmer => (StatusCode::CREATED, "updating.."),
            GatewayOp::DeleteFarmer => (StatusCode::OK, "deleting.."),
            GatewayOp::FarmersByGender => (StatusCode::OK, "gender"),
            GatewayOp::FarmersByAge => (StatusCode::OK, "age"),
            GatewayOp::FarmerById => (StatusCode::ACCEPTED, "farmer Id"),
            GatewayOp::AllFarmers => (StatusCode::OK, "showing all farmers  "),
            GatewayOp::FarmersByCity => (StatusCode::OK, "getting by city inputs"),
            GatewayOp::FarmersBySoilCity => (StatusCode::OK, "getting by soil and city inputs"),
            GatewayOp::FarmersBySoil => (StatusCode::OK, "getting by soil inputs"),
            GatewayOp::AddProblem => (StatusCode::OK, "adding problem from farmer service"),
            GatewayOp::UpdateProblem => (StatusCode::CREATED, "updating.."),
            GatewayOp::DeleteProblem => (StatusCode::OK, "deleting.."),
            GatewayOp::AllProblems => {
                (StatusCode::OK, "showing all problems from framer service ")
            }
            GatewayOp::ProblemsByFarmerId => {
                (StatusCode::ACCEPTED, "from farmer service calling problems")
            }
        };
        RouteMeta { status, desc }
    }

    /// Wraps a collaborator result in this operation's response envelope.
    pub fn reply<T: Serialize>(self, body: T) -> Response {
        let meta = self.meta();
        (meta.status, [(DESC_HEADER, meta.desc)], Json(body)).into_response()
    }

    /// Response envelope for operations that return no body.
    pub fn reply_empty(self) -> Response {
        let meta = self.meta();
        (meta.status, [(DESC_HEADER, meta.desc)]).into_response()
    }
}
