//! Shared types for the cafe service
//!
//! Wire models and response envelopes used by cafe-server and its clients.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Cafe, CafeCreate};
pub use response::{
    CafeListResponse, CafeResponse, ErrorDetail, ErrorResponse, NestedSuccessResponse,
    SuccessResponse,
};
pub use serde::{Deserialize, Serialize};
