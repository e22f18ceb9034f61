//! Categories feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/category` | List all categories |
//! | GET | `/api/category/{id}` | Get one category |
//! | POST | `/api/category` | Create (or reactivate) a category |
//! | PUT | `/api/category/{id}` | Rename a category |
//! | DELETE | `/api/category/{id}` | Soft delete |
//! | DELETE | `/api/category/{id}/purge` | Hard delete |
//!
//! Names are unique among active categories, ignoring case. Creating or
//! renaming onto the name of a soft-deleted category brings that category
//! back instead of inserting a duplicate.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{CategoryRepository, PgCategoryRepository};
pub use services::CategoryService;
