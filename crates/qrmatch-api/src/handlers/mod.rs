//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod matches;
pub mod notifications;
pub mod users;
