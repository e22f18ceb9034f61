mod funko;

pub use funko::{Funko, NewFunko};
