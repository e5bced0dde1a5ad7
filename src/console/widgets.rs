use crate::http_handler::http_handler_common::Stocked;
use crate::http_handler::http_response::dashboard::DashboardResponse;
use crate::{info, log};

/// One rendered dashboard widget: a title plus preformatted body lines.
#[derive(Debug)]
pub(crate) struct DashboardWidget {
    title: String,
    lines: Vec<String>,
}

impl DashboardWidget {
    fn new(title: &str, lines: Vec<String>) -> Self {
        Self { title: String::from(title), lines }
    }

    pub(crate) fn title(&self) -> &str { &self.title }
    pub(crate) fn lines(&self) -> &[String] { &self.lines }
}

/// Builds the widget set for one dashboard snapshot. The three statistics
/// widgets are always present; feed-style widgets are omitted when there
/// is nothing to show rather than rendered empty.
pub(crate) fn build_widgets(dashboard: &DashboardResponse) -> Vec<DashboardWidget> {
    let mut widgets = vec![
        sales_widget(dashboard),
        inventory_widget(dashboard),
        supplier_widget(dashboard),
    ];
    if !dashboard.top_products().is_empty() {
        widgets.push(top_products_widget(dashboard));
    }
    if !dashboard.recent_activity().is_empty() {
        widgets.push(activity_widget(dashboard));
    }
    if let Some(alerts) = stock_alert_widget(dashboard) {
        widgets.push(alerts);
    }
    widgets
}

/// Prints the widgets and the summary count line.
pub(crate) fn render_widgets(widgets: &[DashboardWidget]) {
    for widget in widgets {
        info!("── {} ──", widget.title());
        for line in widget.lines() {
            log!("{line}");
        }
    }
    info!("Initialized {} dashboard widgets", widgets.len());
}

fn sales_widget(dashboard: &DashboardResponse) -> DashboardWidget {
    let sales = dashboard.sales();
    DashboardWidget::new(
        "Sales",
        vec![
            format!("Total sales: {}", sales.total_sales()),
            format!("Orders: {}", sales.order_count()),
            format!("Average order value: {}", sales.average_order_value()),
        ],
    )
}

fn inventory_widget(dashboard: &DashboardResponse) -> DashboardWidget {
    let inventory = dashboard.inventory();
    DashboardWidget::new(
        "Inventory",
        vec![
            format!("Products: {}", inventory.total_products()),
            format!(
                "Low stock: {}, out of stock: {}",
                inventory.low_stock_count(),
                inventory.out_of_stock_count()
            ),
            format!("Inventory value: {}", inventory.inventory_value()),
        ],
    )
}

fn supplier_widget(dashboard: &DashboardResponse) -> DashboardWidget {
    let suppliers = dashboard.suppliers();
    DashboardWidget::new(
        "Suppliers",
        vec![
            format!(
                "Active: {} of {}",
                suppliers.active_suppliers(),
                suppliers.total_suppliers()
            ),
            format!("Average lead time: {:.1} days", suppliers.average_lead_time()),
        ],
    )
}

fn top_products_widget(dashboard: &DashboardResponse) -> DashboardWidget {
    let lines = dashboard
        .top_products()
        .iter()
        .map(|product| {
            format!(
                "#{} {}: {} sold",
                product.product_id(),
                product.name(),
                product.units_sold()
            )
        })
        .collect();
    DashboardWidget::new("Top products", lines)
}

fn activity_widget(dashboard: &DashboardResponse) -> DashboardWidget {
    let lines = dashboard
        .recent_activity()
        .iter()
        .map(|entry| {
            format!(
                "[{}] {} {}",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.kind,
                entry.description
            )
        })
        .collect();
    DashboardWidget::new("Recent activity", lines)
}

/// Only levels that actually need attention make it into the widget.
fn stock_alert_widget(dashboard: &DashboardResponse) -> Option<DashboardWidget> {
    let lines: Vec<String> = dashboard
        .stock_alerts()
        .iter()
        .filter(|level| level.needs_reorder())
        .map(|level| {
            let marker = if level.is_out_of_stock() { "OUT" } else { "LOW" };
            format!(
                "{} {} {}: {} on hand (reorder at {})",
                marker,
                level.sku,
                level.product_name,
                level.quantity_available,
                level.reorder_level
            )
        })
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(DashboardWidget::new("Stock alerts", lines))
    }
}
