//! Category endpoints

use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared::models::{Category, CategoryCreate, CategoryUpdate, ImageUpload};
use shared::request::{ListQuery, ShiftCategorySeq};
use shared::response::PagedList;

use super::ReorderBackend;
use crate::ClientResult;
use crate::http::{HttpClient, MultipartBody};

/// Category endpoints
#[derive(Debug, Clone)]
pub struct CategoryApi<C> {
    http: C,
}

impl<C: HttpClient> CategoryApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// GET /categories
    pub async fn list(&self, query: &ListQuery) -> ClientResult<PagedList<Category>> {
        self.http.get("categories", &query.to_params()).await
    }

    /// PATCH /shift-category-seq
    pub async fn shift_seq(&self, id: i64, name: &str, new_seq_no: i32) -> ClientResult<()> {
        let body = ShiftCategorySeq {
            id,
            name: name.to_string(),
            new_seq_no,
        };
        let _: IgnoredAny = self.http.patch("shift-category-seq", &body).await?;
        Ok(())
    }

    /// POST /category (multipart when an image is attached)
    pub async fn create(
        &self,
        payload: &CategoryCreate,
        image: Option<ImageUpload>,
    ) -> ClientResult<Category> {
        payload.validate()?;
        match image {
            Some(upload) => {
                let form = MultipartBody::from_payload(payload)?.file("image", upload);
                self.http.post_multipart("category", form).await
            }
            None => self.http.post("category", payload).await,
        }
    }

    /// PATCH /category/{id} (multipart when an image is attached)
    pub async fn update(
        &self,
        id: i64,
        payload: &CategoryUpdate,
        image: Option<ImageUpload>,
    ) -> ClientResult<Category> {
        payload.validate()?;
        let path = format!("category/{}", id);
        match image {
            Some(upload) => {
                let form = MultipartBody::from_payload(payload)?.file("image", upload);
                self.http.patch_multipart(&path, form).await
            }
            None => self.http.patch(&path, payload).await,
        }
    }

    /// DELETE /category/{id}
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("category/{}", id)).await?;
        Ok(())
    }
}

#[async_trait]
impl<C: HttpClient> ReorderBackend for CategoryApi<C> {
    type Entity = Category;

    fn label(&self) -> &'static str {
        "category"
    }

    async fn fetch(&self, query: &ListQuery) -> ClientResult<PagedList<Category>> {
        self.list(query).await
    }

    async fn shift(&self, id: i64, name: &str, new_seq_no: i32) -> ClientResult<()> {
        self.shift_seq(id, name, new_seq_no).await
    }
}
