//! Funkos feature.
//!
//! Collectible items that each belong to an active category. Deleting a
//! funko only sets its `is_deleted` flag.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgFunkoRepository;
pub use services::FunkoService;
