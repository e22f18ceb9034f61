pub mod categories;
pub mod funkos;
