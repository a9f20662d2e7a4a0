//! Business logic services
//!
//! Every operation takes the authenticated [`Caller`] explicitly; nothing
//! reads identity from ambient state.

pub mod auth;
pub mod caller;
pub mod context;
pub mod error;
pub mod matches;
pub mod notification;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use caller::Caller;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use matches::MatchService;
pub use notification::NotificationService;
pub use user::UserService;
