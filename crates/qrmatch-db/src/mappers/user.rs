//! User entity <-> model mapper

use qrmatch_core::entities::User;
use qrmatch_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            firstname: model.firstname,
            lastname: model.lastname,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
