//! Domain entities - core business objects

mod access_token;
mod notification;
mod user;
mod user_match;

pub use access_token::AccessToken;
pub use notification::{Notification, NotificationKind, ParseNotificationKindError};
pub use user::User;
pub use user_match::{MatchRole, UserMatch, REASON_MAX_LEN};
