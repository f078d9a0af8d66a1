use crate::shared::format::{format_count, format_currency};
use contracts::dashboards::d400_sales_overview::SummaryMetrics;

/// Display model for one summary tile
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// The four summary cards, in display order
pub fn summary_cards(metrics: &SummaryMetrics) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            icon: "sales",
            label: "Total Sales",
            value: format_currency(metrics.total_sales),
        },
        SummaryCard {
            icon: "transactions",
            label: "Transactions",
            value: format_count(metrics.total_transactions),
        },
        SummaryCard {
            icon: "customers",
            label: "Customers",
            value: format_count(metrics.total_customers),
        },
        SummaryCard {
            icon: "avg-order",
            label: "Avg Order",
            value: format_currency(metrics.avg_order_value),
        },
    ]
}
