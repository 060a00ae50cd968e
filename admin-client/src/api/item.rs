//! Item (product) endpoints, scoped to one category

use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared::models::{ImageUpload, Item, ItemCreate, ItemUpdate};
use shared::request::{ListQuery, ShiftProductSeq};
use shared::response::PagedList;

use super::ReorderBackend;
use crate::ClientResult;
use crate::http::{HttpClient, MultipartBody};

/// Item endpoints, scoped to the category whose items are being listed
#[derive(Debug, Clone)]
pub struct ItemApi<C> {
    http: C,
    category_id: i64,
}

impl<C: HttpClient> ItemApi<C> {
    pub fn new(http: C, category_id: i64) -> Self {
        Self { http, category_id }
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }

    /// GET /items?category_id=..
    pub async fn list(&self, query: &ListQuery) -> ClientResult<PagedList<Item>> {
        let query = query.clone().with_category(self.category_id);
        self.http.get("items", &query.to_params()).await
    }

    /// PATCH /shift-product-seq
    pub async fn shift_seq(&self, id: i64, name: &str, new_seq_no: i32) -> ClientResult<()> {
        let body = ShiftProductSeq {
            id,
            name: name.to_string(),
            category_id: self.category_id,
            new_seq_no,
        };
        let _: IgnoredAny = self.http.patch("shift-product-seq", &body).await?;
        Ok(())
    }

    /// POST /product (multipart when an image is attached)
    pub async fn create(&self, payload: &ItemCreate, image: Option<ImageUpload>) -> ClientResult<Item> {
        payload.validate()?;
        match image {
            Some(upload) => {
                let form = MultipartBody::from_payload(payload)?.file("image", upload);
                self.http.post_multipart("product", form).await
            }
            None => self.http.post("product", payload).await,
        }
    }

    /// PATCH /product/{id} (multipart when an image is attached)
    pub async fn update(
        &self,
        id: i64,
        payload: &ItemUpdate,
        image: Option<ImageUpload>,
    ) -> ClientResult<Item> {
        payload.validate()?;
        let path = format!("product/{}", id);
        match image {
            Some(upload) => {
                let form = MultipartBody::from_payload(payload)?.file("image", upload);
                self.http.patch_multipart(&path, form).await
            }
            None => self.http.patch(&path, payload).await,
        }
    }

    /// DELETE /product/{id}
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("product/{}", id)).await?;
        Ok(())
    }
}

#[async_trait]
impl<C: HttpClient> ReorderBackend for ItemApi<C> {
    type Entity = Item;

    fn label(&self) -> &'static str {
        "item"
    }

    async fn fetch(&self, query: &ListQuery) -> ClientResult<PagedList<Item>> {
        self.list(query).await
    }

    async fn shift(&self, id: i64, name: &str, new_seq_no: i32) -> ClientResult<()> {
        self.shift_seq(id, name, new_seq_no).await
    }
}
