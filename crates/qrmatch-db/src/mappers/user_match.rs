//! UserMatch entity <-> model mapper

use qrmatch_core::entities::UserMatch;
use qrmatch_core::value_objects::Snowflake;

use crate::models::MatchModel;

impl From<MatchModel> for UserMatch {
    fn from(model: MatchModel) -> Self {
        UserMatch {
            id: Snowflake::new(model.id),
            scanner_id: Snowflake::new(model.scanner_id),
            scanned_id: Snowflake::new(model.scanned_id),
            reason: model.reason,
            scanner_status: model.scanner_status,
            scanned_status: model.scanned_status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
