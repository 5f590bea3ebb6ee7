//! Shared record models for the GrowMore farmer platform
//!
//! This crate contains the payload types exchanged between the farmer
//! gateway and its collaborators (the farmer-records backing and the
//! remote problem service).

pub mod models;

pub use models::*;
