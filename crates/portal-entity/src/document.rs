//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A document published to an organization's portal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// The owning organization.
    pub organization_id: Uuid,
    /// Display title.
    pub title: String,
    /// Category: `contract`, `invoice`, `report`, or `general`.
    pub category: String,
    /// Storage path of the underlying file.
    pub file_path: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: String,
    /// File size in bytes.
    pub size: i64,
    /// The account that uploaded the document.
    pub uploaded_by_id: Uuid,
    /// When the document was uploaded.
    pub created_at: DateTime<Utc>,
}
