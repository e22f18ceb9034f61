pub mod funko_handler;

pub use funko_handler::{
    __path_create_funko, __path_delete_funko, __path_find_all_funkos, __path_find_one_funko,
    __path_update_funko, create_funko, delete_funko, find_all_funkos, find_one_funko,
    update_funko,
};
