//! Database models - SQLx-compatible structs for PostgreSQL tables

mod access_token;
mod notification;
mod user;
mod user_match;

pub use access_token::AccessTokenModel;
pub use notification::NotificationModel;
pub use user::UserModel;
pub use user_match::MatchModel;
