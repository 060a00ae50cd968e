//! Request DTOs for list queries and sequence shifts

use serde::{Deserialize, Serialize};

use crate::models::EntityStatus;

/// Page size value meaning "return every row, unpaged"
pub const PAGE_SIZE_ALL: i32 = -1;

/// Body of `PATCH /shift-category-seq`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCategorySeq {
    pub id: i64,
    /// Redundant integrity check alongside `id`
    pub name: String,
    pub new_seq_no: i32,
}

/// Body of `PATCH /shift-product-seq`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftProductSeq {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub new_seq_no: i32,
}

/// Filter and pagination parameters of a list fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    pub page: u32,
    /// Page size, or [`PAGE_SIZE_ALL`]
    pub limit: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl ListQuery {
    pub fn new(page: u32, limit: i32) -> Self {
        Self {
            page,
            limit,
            name: None,
            seq_no: None,
            status: None,
            category_id: None,
        }
    }

    pub fn is_unpaged(&self) -> bool {
        self.limit == PAGE_SIZE_ALL
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Render as URL query parameters.
    ///
    /// Blank search terms are dropped, and `page` is omitted for unpaged
    /// queries since the server ignores it there anyway.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(6);
        if !self.is_unpaged() {
            params.push(("page", self.page.to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("name", name.to_string()));
        }
        if let Some(seq) = self.seq_no.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("seq_no", seq.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(category_id) = self.category_id {
            params.push(("category_id", category_id.to_string()));
        }
        params
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_bodies() {
        let body = ShiftCategorySeq {
            id: 7,
            name: "Desserts".into(),
            new_seq_no: 1,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"id": 7, "name": "Desserts", "new_seq_no": 1})
        );

        let body = ShiftProductSeq {
            id: 12,
            name: "Tiramisu".into(),
            category_id: 7,
            new_seq_no: 3,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"id": 12, "name": "Tiramisu", "category_id": 7, "new_seq_no": 3})
        );
    }

    #[test]
    fn test_params_paged() {
        let mut q = ListQuery::new(2, 10);
        q.name = Some(" pizza ".into());
        q.seq_no = Some("".into());
        q.status = Some(EntityStatus::Active);

        assert_eq!(
            q.to_params(),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("name", "pizza".to_string()),
                ("status", "active".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_unpaged() {
        let q = ListQuery::new(3, PAGE_SIZE_ALL).with_category(5);
        assert!(q.is_unpaged());
        assert_eq!(
            q.to_params(),
            vec![("limit", "-1".to_string()), ("category_id", "5".to_string())]
        );
    }
}
