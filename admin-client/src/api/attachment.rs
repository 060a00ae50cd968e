//! Attachment endpoints

use shared::error::AppError;
use shared::models::{Attachment, ImageUpload, ModuleType};

use crate::ClientResult;
use crate::http::{HttpClient, MultipartBody};

/// Attachment endpoints, keyed by `(module_type, module_id)`
#[derive(Debug, Clone)]
pub struct AttachmentApi<C> {
    http: C,
}

impl<C: HttpClient> AttachmentApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// POST /attachment
    pub async fn upload(
        &self,
        module_type: ModuleType,
        module_id: i64,
        file: ImageUpload,
    ) -> ClientResult<Attachment> {
        if file.bytes.is_empty() {
            return Err(AppError::with_message(
                shared::ErrorCode::NoFileProvided,
                "Attachment file is empty",
            )
            .into());
        }
        let form = MultipartBody::new()
            .text("module_type", module_type.as_str())
            .text("module_id", module_id.to_string())
            .file("file", file);
        self.http.post_multipart("attachment", form).await
    }

    /// PATCH /attachment/{id}/{moduleType}/{moduleId}
    pub async fn reassign(
        &self,
        id: i64,
        module_type: ModuleType,
        module_id: i64,
    ) -> ClientResult<Attachment> {
        let path = format!("attachment/{}/{}/{}", id, module_type, module_id);
        self.http.patch(&path, &serde_json::json!({})).await
    }

    /// GET /attachments?module_type=..&module_id=..
    pub async fn list(
        &self,
        module_type: ModuleType,
        module_id: i64,
    ) -> ClientResult<Vec<Attachment>> {
        let query = [
            ("module_type", module_type.as_str().to_string()),
            ("module_id", module_id.to_string()),
        ];
        self.http.get("attachments", &query).await
    }
}
