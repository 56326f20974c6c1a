//! Audit log model -> entity mapper

use hr_core::entities::AuditLog;
use hr_core::error::DomainError;
use hr_core::value_objects::AuditLogId;

use crate::models::AuditLogModel;

use super::parse_token;

impl TryFrom<AuditLogModel> for AuditLog {
    type Error = DomainError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: AuditLogId::new(model.id),
            table_name: model.table_name,
            action: parse_token("action", &model.action)?,
            record_id: model.record_id,
            old_values: model.old_values,
            new_values: model.new_values,
            changes: model.changes,
            user_id: model.user_id,
            user_name: model.user_name,
            timestamp: model.timestamp,
        })
    }
}
