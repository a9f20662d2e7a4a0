//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in qrmatch-core.

mod access_token;
mod error;
mod notification;
mod user;
mod user_match;

pub use access_token::PgAccessTokenRepository;
pub use notification::PgNotificationRepository;
pub use user::PgUserRepository;
pub use user_match::PgMatchRepository;
