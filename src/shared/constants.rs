/// Postgres SQLSTATE for unique constraint violations
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// Postgres SQLSTATE for foreign key violations
pub const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Partial unique index guarding active category names
pub const CATEGORY_NAME_ACTIVE_INDEX: &str = "categories_name_unique_when_active";
