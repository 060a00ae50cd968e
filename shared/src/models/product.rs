//! Item (product) Model

use serde::{Deserialize, Serialize};

use super::sequenced::Sequenced;
use super::status::EntityStatus;
use crate::error::{AppError, AppResult, ErrorCode};

/// Menu item entity, ordered within its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub seq_no: i32,
    #[serde(default)]
    pub status: EntityStatus,
    /// Price in cents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Sequenced for Item {
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

fn check_price(price: i64) -> AppResult<()> {
    if price <= 0 {
        return Err(
            AppError::with_message(ErrorCode::ProductInvalidPrice, "Price must be positive")
                .with_detail("price", price),
        );
    }
    Ok(())
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub category_id: i64,
    /// Price in cents
    pub price: i64,
    #[serde(default)]
    pub status: EntityStatus,
}

impl ItemCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("Item name"));
        }
        if self.category_id <= 0 {
            return Err(AppError::required("Category"));
        }
        check_price(self.price)
    }
}

/// Update item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

impl ItemUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(AppError::required("Item name"));
        }
        if let Some(price) = self.price {
            check_price(price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, category_id: i64, price: i64) -> ItemCreate {
        ItemCreate {
            name: name.to_string(),
            category_id,
            price,
            status: EntityStatus::Active,
        }
    }

    #[test]
    fn test_item_deserialize_defaults() {
        let json = r#"{"id":9,"name":"Espresso","category_id":2,"seq_no":1}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, EntityStatus::Active);
        assert_eq!(item.price, None);
        assert_eq!(item.seq_no(), 1);
    }

    #[test]
    fn test_create_validation() {
        assert!(create("Espresso", 2, 180).validate().is_ok());
        assert_eq!(
            create("", 2, 180).validate().unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert_eq!(
            create("Espresso", 0, 180).validate().unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert_eq!(
            create("Espresso", 2, 0).validate().unwrap_err().code,
            ErrorCode::ProductInvalidPrice
        );
    }

    #[test]
    fn test_update_validation() {
        let update = ItemUpdate {
            price: Some(-5),
            ..Default::default()
        };
        assert_eq!(
            update.validate().unwrap_err().code,
            ErrorCode::ProductInvalidPrice
        );
        assert!(ItemUpdate::default().validate().is_ok());
    }
}
