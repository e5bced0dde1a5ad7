use super::http_response::{
    dashboard, login, logout, order_create, order_list, product_create, product_delete,
    product_list, product_modify, stock_levels, stock_movement, supplier_list,
};

pub mod ad_hoc;
pub mod dashboard_get;
pub mod login_post;
pub mod logout_post;
pub mod order_create_post;
pub mod order_list_get;
pub mod product_create_post;
pub mod product_delete_delete;
pub mod product_list_get;
pub mod product_modify_put;
pub mod request_common;
pub mod stock_levels_get;
pub mod stock_movement_post;
pub mod supplier_list_get;
