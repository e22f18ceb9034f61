mod funko_service;

pub use funko_service::FunkoService;
