//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a column holds a tag that has to be parsed

mod access_token;
mod notification;
mod user;
mod user_match;
