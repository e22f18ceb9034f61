mod funko_repository;
#[cfg(test)]
pub mod memory;

pub use funko_repository::{FunkoRepository, PgFunkoRepository};
