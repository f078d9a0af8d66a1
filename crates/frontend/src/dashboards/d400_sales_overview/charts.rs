//! Chart.js configuration for the sales overview charts
//!
//! The builders here are pure: they turn API rows into a serializable
//! [`ChartConfig`] plus the precomputed tooltip texts. Mounting on a canvas
//! happens in [`super::chart_js`].

use crate::shared::format::{format_currency, format_percent};
use contracts::dashboards::d400_sales_overview::{CityRevenue, MonthlySalesPoint, ProductRevenue};
use serde::Serialize;

pub const MONTHLY_SALES_CANVAS: &str = "monthlySalesChart";
pub const TOP_PRODUCTS_CANVAS: &str = "topProductsChart";
pub const SALES_BY_CITY_CANVAS: &str = "salesByCityChart";

pub const MONTHLY_SALES_LABEL: &str = "Monthly Sales";
pub const SALES_BY_CITY_LABEL: &str = "Revenue by City";

/// Segment colors for the top products doughnut
pub const PRODUCT_PALETTE: [&str; 7] = [
    "#667eea", "#764ba2", "#48bb78", "#ed8936", "#f56565", "#38b2ac", "#805ad5",
];

const ACCENT: &str = "#667eea";
const ACCENT_HOVER: &str = "#5a67d8";
const GRID_COLOR: &str = "rgba(0,0,0,0.1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerItem(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub padding: u32,
    pub use_point_style: bool,
    pub point_style: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: &'static str,
}

/// Everything needed to draw one chart on its canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub canvas_id: &'static str,
    pub config: ChartConfig,
    /// Format value axis ticks as currency
    pub currency_ticks: bool,
    /// Tooltip text per data index; `None` keeps the Chart.js default
    pub tooltip_labels: Option<Vec<String>>,
}

impl ChartSpec {
    /// Number of points in the first dataset
    pub fn point_count(&self) -> usize {
        self.config
            .data
            .datasets
            .first()
            .map(|d| d.data.len())
            .unwrap_or(0)
    }
}

/// Share of each value in the total, in percent rounded to one decimal
///
/// Returns zeros when the total is zero so that empty data never yields NaN.
pub fn revenue_shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| (v / total * 100.0 * 10.0).round() / 10.0)
        .collect()
}

/// Colors for `count` segments, cycling through the palette
pub fn palette_colors(count: usize) -> Vec<String> {
    PRODUCT_PALETTE
        .iter()
        .cycle()
        .take(count)
        .map(|c| c.to_string())
        .collect()
}

/// Y-axis tick text for the raw value Chart.js passes in
pub fn tick_text(value: Option<f64>) -> String {
    format_currency(value.unwrap_or(0.0))
}

/// Tooltip text for the point at `index` (Chart.js `dataIndex`)
pub fn tooltip_text(labels: &[String], index: Option<f64>) -> Option<&str> {
    let index = index?;
    if index < 0.0 || index.fract() != 0.0 {
        return None;
    }
    labels.get(index as usize).map(String::as_str)
}

fn value_scales() -> Scales {
    Scales {
        x: Axis {
            begin_at_zero: None,
            grid: Grid {
                display: false,
                color: None,
            },
        },
        y: Axis {
            begin_at_zero: Some(true),
            grid: Grid {
                display: true,
                color: Some(GRID_COLOR),
            },
        },
    }
}

fn top_legend() -> Legend {
    Legend {
        display: true,
        position: LegendPosition::Top,
        labels: None,
    }
}

pub fn monthly_sales_chart(points: &[MonthlySalesPoint]) -> ChartSpec {
    let dataset = Dataset {
        label: Some(MONTHLY_SALES_LABEL.to_string()),
        data: points.iter().map(|p| p.total_sales).collect(),
        background_color: Some(ColorSpec::Single("rgba(102, 126, 234, 0.1)".to_string())),
        border_color: Some(ACCENT.to_string()),
        border_width: Some(3),
        fill: Some(true),
        tension: Some(0.4),
        point_background_color: Some(ACCENT.to_string()),
        point_border_color: Some("#fff".to_string()),
        point_border_width: Some(2),
        point_radius: Some(6),
        point_hover_radius: Some(8),
        ..Dataset::default()
    };

    ChartSpec {
        canvas_id: MONTHLY_SALES_CANVAS,
        config: ChartConfig {
            kind: ChartKind::Line,
            data: ChartData {
                labels: points.iter().map(|p| p.month.clone()).collect(),
                datasets: vec![dataset],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: top_legend(),
                },
                scales: Some(value_scales()),
                interaction: Some(Interaction {
                    intersect: false,
                    mode: "index",
                }),
                animation: None,
            },
        },
        currency_ticks: true,
        tooltip_labels: None,
    }
}

pub fn top_products_chart(products: &[ProductRevenue]) -> ChartSpec {
    let values: Vec<f64> = products.iter().map(|p| p.revenue).collect();
    let shares = revenue_shares(&values);

    let tooltip_labels = products
        .iter()
        .zip(shares.iter())
        .map(|(p, share)| {
            format!(
                "{}: {} ({})",
                p.product_name,
                format_currency(p.revenue),
                format_percent(*share)
            )
        })
        .collect();

    let dataset = Dataset {
        data: values,
        background_color: Some(ColorSpec::PerItem(palette_colors(products.len()))),
        border_color: Some("#fff".to_string()),
        border_width: Some(2),
        hover_border_width: Some(3),
        hover_offset: Some(10),
        ..Dataset::default()
    };

    ChartSpec {
        canvas_id: TOP_PRODUCTS_CANVAS,
        config: ChartConfig {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: products.iter().map(|p| p.product_name.clone()).collect(),
                datasets: vec![dataset],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: Legend {
                        display: true,
                        position: LegendPosition::Bottom,
                        labels: Some(LegendLabels {
                            padding: 20,
                            use_point_style: true,
                            point_style: "circle",
                        }),
                    },
                },
                scales: None,
                interaction: None,
                animation: None,
            },
        },
        currency_ticks: false,
        tooltip_labels: Some(tooltip_labels),
    }
}

pub fn sales_by_city_chart(cities: &[CityRevenue]) -> ChartSpec {
    let tooltip_labels = cities
        .iter()
        .map(|c| format!("{}: {}", SALES_BY_CITY_LABEL, format_currency(c.total_revenue)))
        .collect();

    let dataset = Dataset {
        label: Some(SALES_BY_CITY_LABEL.to_string()),
        data: cities.iter().map(|c| c.total_revenue).collect(),
        background_color: Some(ColorSpec::Single("rgba(102, 126, 234, 0.8)".to_string())),
        border_color: Some(ACCENT.to_string()),
        border_width: Some(2),
        border_radius: Some(8),
        border_skipped: Some(false),
        hover_background_color: Some("rgba(102, 126, 234, 1)".to_string()),
        hover_border_color: Some(ACCENT_HOVER.to_string()),
        ..Dataset::default()
    };

    ChartSpec {
        canvas_id: SALES_BY_CITY_CANVAS,
        config: ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: cities.iter().map(|c| c.city.clone()).collect(),
                datasets: vec![dataset],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: top_legend(),
                },
                scales: Some(value_scales()),
                interaction: None,
                animation: Some(Animation {
                    duration: 1000,
                    easing: "easeOutQuart",
                }),
            },
        },
        currency_ticks: true,
        tooltip_labels: Some(tooltip_labels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(name: &str, revenue: f64) -> ProductRevenue {
        ProductRevenue {
            product_name: name.to_string(),
            revenue,
            total_sold: 0,
        }
    }

    fn sample_products() -> Vec<ProductRevenue> {
        vec![
            product("Laptop Gaming", 30_000_000.0),
            product("Monitor 24 inch", 2_500_000.0),
            product("Keyboard Mechanical", 2_400_000.0),
            product("Headset Gaming", 1_500_000.0),
            product("Mouse Wireless", 600_000.0),
        ]
    }

    #[test]
    fn test_revenue_shares_sum_to_hundred() {
        let cases: Vec<Vec<f64>> = vec![
            vec![30_000_000.0, 2_500_000.0, 2_400_000.0, 1_500_000.0, 600_000.0],
            vec![1.0, 1.0, 1.0],
            vec![7.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        ];
        for values in cases {
            let shares = revenue_shares(&values);
            let sum: f64 = shares.iter().sum();
            let tolerance = 0.05 * values.len() as f64 + 1e-9;
            assert!((sum - 100.0).abs() <= tolerance, "{values:?} -> {sum}");
        }
    }

    #[test]
    fn test_revenue_shares_zero_total() {
        assert_eq!(revenue_shares(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(revenue_shares(&[]).is_empty());
    }

    #[test]
    fn test_palette_truncates_and_cycles() {
        assert_eq!(palette_colors(2), vec!["#667eea", "#764ba2"]);
        let nine = palette_colors(9);
        assert_eq!(nine.len(), 9);
        assert_eq!(nine[7], PRODUCT_PALETTE[0]);
        assert_eq!(nine[8], PRODUCT_PALETTE[1]);
    }

    #[test]
    fn test_monthly_sales_chart() {
        let points = vec![
            MonthlySalesPoint {
                month: "2024-01".into(),
                total_sales: 20_200_000.0,
                total_transactions: 5,
            },
            MonthlySalesPoint {
                month: "2024-02".into(),
                total_sales: 16_800_000.0,
                total_transactions: 3,
            },
        ];

        let spec = monthly_sales_chart(&points);
        assert_eq!(spec.canvas_id, MONTHLY_SALES_CANVAS);
        assert_eq!(spec.config.kind, ChartKind::Line);
        assert_eq!(spec.point_count(), 2);
        assert_eq!(spec.config.data.labels, vec!["2024-01", "2024-02"]);
        assert!(spec.currency_ticks);

        let dataset = &spec.config.data.datasets[0];
        assert_eq!(dataset.fill, Some(true));
        assert_eq!(dataset.tension, Some(0.4));

        let scales = spec.config.options.scales.as_ref().unwrap();
        assert_eq!(scales.y.begin_at_zero, Some(true));
        assert!(scales.y.grid.display);
    }

    #[test]
    fn test_top_products_chart() {
        let spec = top_products_chart(&sample_products());
        assert_eq!(spec.config.kind, ChartKind::Doughnut);
        assert_eq!(spec.point_count(), 5);
        assert!(!spec.currency_ticks);

        let labels = spec.tooltip_labels.as_ref().unwrap();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "Laptop Gaming: Rp 30.000.000 (81.1%)");
        assert_eq!(labels[4], "Mouse Wireless: Rp 600.000 (1.6%)");

        match &spec.config.data.datasets[0].background_color {
            Some(ColorSpec::PerItem(colors)) => assert_eq!(colors.len(), 5),
            other => panic!("unexpected colors: {other:?}"),
        }
    }

    #[test]
    fn test_sales_by_city_chart() {
        let cities = vec![
            CityRevenue {
                city: "Jakarta".into(),
                total_revenue: 17_700_000.0,
                total_orders: 3,
            },
            CityRevenue {
                city: "Medan".into(),
                total_revenue: 1_500_000.0,
                total_orders: 1,
            },
        ];

        let spec = sales_by_city_chart(&cities);
        assert_eq!(spec.config.kind, ChartKind::Bar);
        assert_eq!(spec.point_count(), 2);
        assert_eq!(spec.config.data.labels, vec!["Jakarta", "Medan"]);
        assert_eq!(
            spec.tooltip_labels.unwrap(),
            vec![
                "Revenue by City: Rp 17.700.000".to_string(),
                "Revenue by City: Rp 1.500.000".to_string(),
            ]
        );
    }

    #[test]
    fn test_chart_config_serializes_in_chart_js_shape() {
        let spec = sales_by_city_chart(&[]);
        let value = serde_json::to_value(&spec.config).unwrap();

        assert_eq!(value["type"], json!("bar"));
        assert_eq!(value["options"]["maintainAspectRatio"], json!(false));
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], json!(true));
        assert_eq!(value["options"]["scales"]["x"]["grid"]["display"], json!(false));
        assert_eq!(value["data"]["datasets"][0]["borderRadius"], json!(8));
        assert!(value["data"]["datasets"][0].get("tension").is_none());
    }

    #[test]
    fn test_tick_text() {
        assert_eq!(tick_text(Some(15_000_000.0)), "Rp 15.000.000");
        assert_eq!(tick_text(Some(0.0)), "Rp 0");
        assert_eq!(tick_text(None), "Rp 0");
    }

    #[test]
    fn test_tooltip_text_lookup() {
        let labels = vec!["Jakarta: Rp 1".to_string(), "Medan: Rp 2".to_string()];

        assert_eq!(tooltip_text(&labels, Some(0.0)), Some("Jakarta: Rp 1"));
        assert_eq!(tooltip_text(&labels, Some(1.0)), Some("Medan: Rp 2"));
        assert_eq!(tooltip_text(&labels, Some(2.0)), None);
        assert_eq!(tooltip_text(&labels, Some(-1.0)), None);
        assert_eq!(tooltip_text(&labels, Some(0.5)), None);
        assert_eq!(tooltip_text(&labels, Some(f64::NAN)), None);
        assert_eq!(tooltip_text(&labels, None), None);
        assert_eq!(tooltip_text(&[], Some(0.0)), None);
    }

    #[test]
    fn test_tooltip_text_matches_products_chart() {
        let spec = top_products_chart(&sample_products());
        let labels = spec.tooltip_labels.unwrap();

        assert_eq!(
            tooltip_text(&labels, Some(0.0)),
            Some("Laptop Gaming: Rp 30.000.000 (81.1%)")
        );
    }
}
