use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for funko
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Funko {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub image: String,
    pub is_deleted: bool,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Funko {
    pub fn set_deleted(&mut self, is_deleted: bool) {
        self.is_deleted = is_deleted;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A funko that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewFunko {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub image: String,
    pub is_deleted: bool,
    pub category_id: Uuid,
}
