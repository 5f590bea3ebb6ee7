//! HTTP handlers for the farmer gateway

pub mod farmers;
pub mod problems;

pub use farmers::*;
pub use problems::*;
