//! AccessToken entity <-> model mapper

use qrmatch_core::entities::AccessToken;
use qrmatch_core::value_objects::Snowflake;

use crate::models::AccessTokenModel;

impl From<AccessTokenModel> for AccessToken {
    fn from(model: AccessTokenModel) -> Self {
        AccessToken {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            token_hash: model.token_hash,
            created_at: model.created_at,
            expires_at: model.expires_at,
            last_used_at: model.last_used_at,
        }
    }
}
