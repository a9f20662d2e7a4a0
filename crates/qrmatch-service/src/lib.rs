//! # qrmatch-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AuthService, Caller, MatchService, NotificationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
