use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// A fresh, active category that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_active() {
        let category = Category::new("Marvel");
        assert!(category.is_active);
        assert_eq!(category.name, "Marvel");
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn test_set_active_touches_updated_at() {
        let mut category = Category::new("Marvel");
        let before = category.updated_at;
        category.set_active(false);
        assert!(!category.is_active);
        assert!(category.updated_at >= before);
    }
}
