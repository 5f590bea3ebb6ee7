//! Record models for the farmer gateway
//!
//! Re-exports the payload types from the shared crate

pub use shared::models::*;
