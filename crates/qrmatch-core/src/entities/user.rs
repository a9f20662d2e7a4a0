//! User entity - a registered account that owns a QR profile

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Registered user. The password hash is not part of the entity;
/// it only exists in the persistence model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: Snowflake,
        firstname: String,
        lastname: String,
        email: String,
        phone: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            firstname,
            lastname,
            email,
            phone,
            created_at: now,
            updated_at: now,
        }
    }
}
