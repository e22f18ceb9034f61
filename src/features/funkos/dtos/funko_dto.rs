use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::funkos::models::{Funko, NewFunko};
use crate::shared::validation::{validate_not_blank, validate_price, IMAGE_REF_REGEX};

// Create request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFunkoDto {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64)]
    pub price: Decimal,

    #[validate(range(min = 0))]
    pub quantity: i32,

    #[validate(length(max = 255), regex(path = *IMAGE_REF_REGEX, message = "image must not contain whitespace"))]
    pub image: String,

    #[serde(default)]
    pub is_deleted: bool,

    /// Name of an active category
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub category: String,
}

impl CreateFunkoDto {
    pub fn to_entity(&self, category_id: Uuid) -> NewFunko {
        NewFunko {
            name: self.name.trim().to_string(),
            price: self.price,
            quantity: self.quantity,
            image: self.image.clone(),
            is_deleted: self.is_deleted,
            category_id,
        }
    }
}

// Update request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFunkoDto {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,

    #[validate(range(min = 0))]
    pub quantity: Option<i32>,

    #[validate(length(max = 255), regex(path = *IMAGE_REF_REGEX, message = "image must not contain whitespace"))]
    pub image: Option<String>,

    pub is_deleted: Option<bool>,

    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub category: Option<String>,
}

impl UpdateFunkoDto {
    /// Apply the present fields; `category_id` is the already-resolved category
    pub fn apply_to(&self, mut funko: Funko, category_id: Option<Uuid>) -> Funko {
        if let Some(ref name) = self.name {
            funko.name = name.trim().to_string();
        }
        if let Some(price) = self.price {
            funko.price = price;
        }
        if let Some(quantity) = self.quantity {
            funko.quantity = quantity;
        }
        if let Some(ref image) = self.image {
            funko.image = image.clone();
        }
        if let Some(is_deleted) = self.is_deleted {
            funko.is_deleted = is_deleted;
        }
        if let Some(category_id) = category_id {
            funko.category_id = category_id;
        }
        funko.touch();
        funko
    }
}

/// Response DTO for funko
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunkoResponseDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: i32,
    pub image: String,
    pub is_deleted: bool,
    /// Category name
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FunkoResponseDto {
    pub fn new(f: Funko, category: String) -> Self {
        Self {
            id: f.id,
            name: f.name,
            price: f.price,
            quantity: f.quantity,
            image: f.image,
            is_deleted: f.is_deleted,
            category,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_create() -> serde_json::Value {
        json!({
            "name": "Spiderman",
            "price": 100,
            "quantity": 10,
            "image": "image.png",
            "isDeleted": false,
            "category": "category"
        })
    }

    #[test]
    fn test_create_dto_parses_and_validates() {
        let dto: CreateFunkoDto = serde_json::from_value(valid_create()).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.price, Decimal::from(100));
    }

    #[test]
    fn test_create_dto_defaults_is_deleted() {
        let mut body = valid_create();
        body.as_object_mut().unwrap().remove("isDeleted");
        let dto: CreateFunkoDto = serde_json::from_value(body).unwrap();
        assert!(!dto.is_deleted);
    }

    #[test]
    fn test_create_dto_rejects_bad_values() {
        let cases = [
            ("price", json!(-1)),
            ("quantity", json!(-5)),
            ("image", json!("my image.png")),
            ("name", json!("   ")),
            ("category", json!("")),
            ("price", json!(123456789)),
            ("price", json!(19.999)),
        ];

        for (field, value) in cases {
            let mut body = valid_create();
            body[field] = value;
            let dto: CreateFunkoDto = serde_json::from_value(body).unwrap();
            assert!(dto.validate().is_err(), "{} should be rejected", field);
        }
    }

    #[test]
    fn test_update_dto_rejects_unstorable_prices() {
        for price in ["123456789", "19.999"] {
            let dto = UpdateFunkoDto {
                price: Some(price.parse().unwrap()),
                ..Default::default()
            };
            assert!(dto.validate().is_err(), "{} should be rejected", price);
        }

        let dto = UpdateFunkoDto {
            price: Some("99999999.99".parse().unwrap()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_dto_only_touches_present_fields() {
        let now = Utc::now();
        let funko = Funko {
            id: 1,
            name: "Spiderman".to_string(),
            price: Decimal::from(100),
            quantity: 10,
            image: "image.png".to_string(),
            is_deleted: false,
            category_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };
        let dto = UpdateFunkoDto {
            price: Some(Decimal::new(8550, 2)),
            is_deleted: Some(false),
            ..Default::default()
        };

        let updated = dto.apply_to(funko.clone(), None);
        assert_eq!(updated.price, Decimal::new(8550, 2));
        assert_eq!(updated.name, funko.name);
        assert_eq!(updated.quantity, funko.quantity);
        assert_eq!(updated.category_id, funko.category_id);
        assert!(updated.updated_at >= funko.updated_at);
    }

    #[test]
    fn test_response_price_is_a_number() {
        let now = Utc::now();
        let funko = Funko {
            id: 7,
            name: "Batman".to_string(),
            price: Decimal::new(1999, 2),
            quantity: 3,
            image: "batman.png".to_string(),
            is_deleted: false,
            category_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(FunkoResponseDto::new(funko, "DC".to_string())).unwrap();
        assert_eq!(json["price"], json!(19.99));
        assert_eq!(json["category"], "DC");
        assert_eq!(json["isDeleted"], false);
    }
}
