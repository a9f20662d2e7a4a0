//! Notification entity <-> model mapper

use qrmatch_core::entities::{Notification, NotificationKind};
use qrmatch_core::error::DomainError;
use qrmatch_core::value_objects::Snowflake;

use crate::models::NotificationModel;

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse::<NotificationKind>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Notification {
            id: Snowflake::new(model.id),
            kind,
            scanner_id: Snowflake::new(model.scanner_id),
            scanned_id: Snowflake::new(model.scanned_id),
            status: model.status,
            read: model.read,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
