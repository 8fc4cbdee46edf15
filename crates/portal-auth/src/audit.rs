//! Fire-and-forget audit recording.

use std::sync::Arc;

use tracing::error;

use portal_database::repositories::AuditLogRepository;
use portal_entity::audit::CreateAuditLogEntry;

/// Writes audit entries without blocking the caller's outcome.
///
/// A failed audit write is logged and swallowed: losing one trail entry
/// is preferable to failing a login that already succeeded.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    repo: Arc<AuditLogRepository>,
}

impl AuditRecorder {
    /// Create a new audit recorder.
    pub fn new(repo: Arc<AuditLogRepository>) -> Self {
        Self { repo }
    }

    /// Record an audit entry. Never returns an error.
    pub async fn record(&self, entry: CreateAuditLogEntry) {
        if let Err(e) = self.repo.create(&entry).await {
            error!(
                error = %e,
                action = %entry.action,
                "Failed to write audit log entry"
            );
        }
    }
}
