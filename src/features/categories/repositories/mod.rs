mod category_repository;
#[cfg(test)]
pub mod memory;

pub use category_repository::{CategoryRepository, PgCategoryRepository};
