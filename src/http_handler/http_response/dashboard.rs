use crate::http_handler::http_handler_common::{ActivityEntry, StockLevel};
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use fixed::types::I64F64;

/// Response type for the /dashboard endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct DashboardResponse {
    sales: SalesStatistics,
    inventory: InventoryStatistics,
    suppliers: SupplierStatistics,
    top_products: Vec<TopProduct>,
    recent_activity: Vec<ActivityEntry>,
    stock_alerts: Vec<StockLevel>,
}

impl SerdeJSONBodyHTTPResponseType for DashboardResponse {}

impl DashboardResponse {
    pub(crate) fn sales(&self) -> &SalesStatistics { &self.sales }
    pub(crate) fn inventory(&self) -> &InventoryStatistics { &self.inventory }
    pub(crate) fn suppliers(&self) -> &SupplierStatistics { &self.suppliers }
    pub(crate) fn top_products(&self) -> &[TopProduct] { &self.top_products }
    pub(crate) fn recent_activity(&self) -> &[ActivityEntry] { &self.recent_activity }
    pub(crate) fn stock_alerts(&self) -> &[StockLevel] { &self.stock_alerts }
}

/// Sales figures over the requested reporting window.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct SalesStatistics {
    total_sales: I64F64,
    order_count: u32,
    average_order_value: I64F64,
}

impl SalesStatistics {
    pub(crate) fn total_sales(&self) -> I64F64 { self.total_sales }
    pub(crate) fn order_count(&self) -> u32 { self.order_count }
    pub(crate) fn average_order_value(&self) -> I64F64 { self.average_order_value }
}

#[derive(serde::Deserialize, Debug)]
pub(crate) struct InventoryStatistics {
    total_products: u32,
    low_stock_count: u32,
    out_of_stock_count: u32,
    inventory_value: I64F64,
}

impl InventoryStatistics {
    pub(crate) fn total_products(&self) -> u32 { self.total_products }
    pub(crate) fn low_stock_count(&self) -> u32 { self.low_stock_count }
    pub(crate) fn out_of_stock_count(&self) -> u32 { self.out_of_stock_count }
    pub(crate) fn inventory_value(&self) -> I64F64 { self.inventory_value }
}

#[derive(serde::Deserialize, Debug)]
pub(crate) struct SupplierStatistics {
    total_suppliers: u32,
    active_suppliers: u32,
    average_lead_time: f64,
}

impl SupplierStatistics {
    pub(crate) fn total_suppliers(&self) -> u32 { self.total_suppliers }
    pub(crate) fn active_suppliers(&self) -> u32 { self.active_suppliers }
    pub(crate) fn average_lead_time(&self) -> f64 { self.average_lead_time }
}

/// One row of the best-sellers table.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct TopProduct {
    product_id: u32,
    name: String,
    units_sold: u32,
}

impl TopProduct {
    pub(crate) fn product_id(&self) -> u32 { self.product_id }
    pub(crate) fn name(&self) -> &str { &self.name }
    pub(crate) fn units_sold(&self) -> u32 { self.units_sold }
}
