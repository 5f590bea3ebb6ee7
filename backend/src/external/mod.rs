//! External API integrations

pub mod problems;

pub use problems::ProblemServiceClient;
