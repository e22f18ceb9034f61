pub mod category_handler;

pub use category_handler::{
    __path_create_category, __path_delete_category, __path_find_all_categories,
    __path_find_one_category, __path_purge_category, __path_update_category, create_category,
    delete_category, find_all_categories, find_one_category, purge_category, update_category,
};
