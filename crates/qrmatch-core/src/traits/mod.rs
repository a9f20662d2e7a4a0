//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    AccessTokenRepository, MatchRepository, NotificationRepository, RepoResult, UserRepository,
};
