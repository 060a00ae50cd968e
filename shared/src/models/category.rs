//! Category Model

use serde::{Deserialize, Serialize};

use super::sequenced::Sequenced;
use super::status::EntityStatus;
use crate::error::{AppError, AppResult};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Display label; the backend calls this field `category`
    #[serde(rename = "category")]
    pub name: String,
    pub seq_no: i32,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Sequenced for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn seq_no(&self) -> i32 {
        self.seq_no
    }

    fn set_seq_no(&mut self, seq_no: i32) {
        self.seq_no = seq_no;
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(rename = "category")]
    pub name: String,
    #[serde(default)]
    pub status: EntityStatus,
}

impl CategoryCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("Category name"));
        }
        Ok(())
    }
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

impl CategoryUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(AppError::required("Category name"));
        }
        Ok(())
    }
}
