//! Attachment Model
//!
//! Images are not stored on the entity itself; they are attachments keyed by
//! `(module_type, module_id)`.

use serde::{Deserialize, Serialize};

/// Owner type of an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    Category,
    Product,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Category => "category",
            ModuleType::Product => "product",
        }
    }
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attachment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub module_type: ModuleType,
    pub module_id: i64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// File to upload alongside a create/update
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_type_wire() {
        assert_eq!(ModuleType::Product.to_string(), "product");
        let a: Attachment = serde_json::from_str(
            r#"{"id":1,"module_type":"category","module_id":4,"url":"/files/a.png"}"#,
        )
        .unwrap();
        assert_eq!(a.module_type, ModuleType::Category);
        assert_eq!(a.module_id, 4);
    }
}
