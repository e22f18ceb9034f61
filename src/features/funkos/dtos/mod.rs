pub mod funko_dto;

pub use funko_dto::{CreateFunkoDto, FunkoResponseDto, UpdateFunkoDto};
