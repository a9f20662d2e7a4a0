//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest, ScanRequest};

pub use responses::{
    HealthChecks, HealthResponse, LoginResponse, MatchAsScanned, MatchAsScanner,
    MatchDetailResponse, MatchListResponse, MatchView, MessageResponse, NotificationResponse,
    NotificationWithUsers, ReadinessResponse, RegisterResponse, ScanEntry, ScannedByEntry,
    UnreadCountResponse, UserResponse,
};
