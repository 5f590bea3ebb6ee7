//! Collaborator interfaces consumed by the farmer gateway

pub mod farmer;
pub mod problems;

pub use farmer::{FarmerService, InMemoryFarmerService};
pub use problems::ProblemClient;
