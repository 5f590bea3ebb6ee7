//! Record models passed through the farmer gateway

mod farmer;
mod problem;

pub use farmer::*;
pub use problem::*;
