pub mod response_common;

pub mod dashboard;
pub mod login;
pub mod logout;
pub mod order_create;
pub mod order_list;
pub mod product_create;
pub mod product_delete;
pub mod product_list;
pub mod product_modify;
pub mod stock_levels;
pub mod stock_movement;
pub mod supplier_list;
