//! Load-then-render sequence of the sales overview dashboard

use super::api::{FetchError, SalesApi};
use super::cards::{summary_cards, SummaryCard};
use super::charts::{monthly_sales_chart, sales_by_city_chart, top_products_chart, ChartSpec};

/// Message shown in place of the summary cards when any load step fails
pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load dashboard data. Please check if the API server is running.";

/// Rendering surface the controller writes into
pub trait DashboardView {
    fn show_loading(&mut self);
    fn render_summary(&mut self, cards: Vec<SummaryCard>);
    fn render_monthly_sales(&mut self, chart: ChartSpec);
    fn render_top_products(&mut self, chart: ChartSpec);
    fn render_sales_by_city(&mut self, chart: ChartSpec);
    fn show_error(&mut self, message: &str);
}

pub struct DashboardController<A, V> {
    api: A,
    view: V,
}

impl<A: SalesApi, V: DashboardView> DashboardController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    #[cfg(test)]
    fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    fn into_parts(self) -> (A, V) {
        (self.api, self.view)
    }

    /// Load summary, monthly sales, top products and sales by city, in that
    /// order. The first failure stops the sequence and replaces the summary
    /// region with [`LOAD_ERROR_MESSAGE`].
    pub async fn initialize(&mut self) -> Result<(), FetchError> {
        match self.load_all().await {
            Ok(()) => {
                log::debug!("Sales dashboard loaded");
                Ok(())
            }
            Err(err) => {
                log::error!("Error initializing dashboard: {}", err);
                self.view.show_error(LOAD_ERROR_MESSAGE);
                Err(err)
            }
        }
    }

    async fn load_all(&mut self) -> Result<(), FetchError> {
        self.load_summary().await?;
        self.load_monthly_sales().await?;
        self.load_top_products().await?;
        self.load_sales_by_city().await?;
        Ok(())
    }

    pub async fn load_summary(&mut self) -> Result<(), FetchError> {
        self.view.show_loading();
        let metrics = self.api.summary().await?;
        self.view.render_summary(summary_cards(&metrics));
        Ok(())
    }

    pub async fn load_monthly_sales(&mut self) -> Result<(), FetchError> {
        let points = self.api.monthly_sales().await?;
        log::debug!("Loaded {} monthly sales points", points.len());
        self.view.render_monthly_sales(monthly_sales_chart(&points));
        Ok(())
    }

    pub async fn load_top_products(&mut self) -> Result<(), FetchError> {
        let products = self.api.top_products().await?;
        log::debug!("Loaded {} top products", products.len());
        self.view.render_top_products(top_products_chart(&products));
        Ok(())
    }

    pub async fn load_sales_by_city(&mut self) -> Result<(), FetchError> {
        let cities = self.api.sales_by_city().await?;
        log::debug!("Loaded {} cities", cities.len());
        self.view.render_sales_by_city(sales_by_city_chart(&cities));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::dashboards::d400_sales_overview::{
        CityRevenue, MonthlySalesPoint, ProductRevenue, SummaryMetrics,
    };
    use std::cell::RefCell;

    struct MockApi {
        summary: Result<SummaryMetrics, FetchError>,
        monthly: Result<Vec<MonthlySalesPoint>, FetchError>,
        products: Result<Vec<ProductRevenue>, FetchError>,
        cities: Result<Vec<CityRevenue>, FetchError>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl MockApi {
        fn canned() -> Self {
            Self {
                summary: Ok(SummaryMetrics {
                    total_sales: 1234567.0,
                    total_transactions: 42,
                    total_customers: 10,
                    avg_order_value: 29394.45,
                }),
                monthly: Ok(vec![
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
                    MonthlySalesPoint {
                        month: "2024-03".into(),
                        total_sales: 9_000_000.0,
                        total_transactions: 2,
                    },
                ]),
                products: Ok(vec![
                    ProductRevenue {
                        product_name: "Laptop Gaming".into(),
                        revenue: 30_000_000.0,
                        total_sold: 2,
                    },
                    ProductRevenue {
                        product_name: "Mouse Wireless".into(),
                        revenue: 600_000.0,
                        total_sold: 3,
                    },
                ]),
                cities: Ok(vec![
                    CityRevenue {
                        city: "Jakarta".into(),
                        total_revenue: 17_700_000.0,
                        total_orders: 3,
                    },
                    CityRevenue {
                        city: "Surabaya".into(),
                        total_revenue: 15_400_000.0,
                        total_orders: 2,
                    },
                    CityRevenue {
                        city: "Bandung".into(),
                        total_revenue: 2_400_000.0,
                        total_orders: 2,
                    },
                    CityRevenue {
                        city: "Medan".into(),
                        total_revenue: 1_500_000.0,
                        total_orders: 1,
                    },
                ]),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl SalesApi for MockApi {
        async fn summary(&self) -> Result<SummaryMetrics, FetchError> {
            self.calls.borrow_mut().push("summary");
            self.summary.clone()
        }

        async fn monthly_sales(&self) -> Result<Vec<MonthlySalesPoint>, FetchError> {
            self.calls.borrow_mut().push("monthly-sales");
            self.monthly.clone()
        }

        async fn top_products(&self) -> Result<Vec<ProductRevenue>, FetchError> {
            self.calls.borrow_mut().push("top-products");
            self.products.clone()
        }

        async fn sales_by_city(&self) -> Result<Vec<CityRevenue>, FetchError> {
            self.calls.borrow_mut().push("sales-by-city");
            self.cities.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        Loading,
        Summary(Vec<SummaryCard>),
        MonthlySales(ChartSpec),
        TopProducts(ChartSpec),
        SalesByCity(ChartSpec),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<ViewEvent>,
    }

    impl RecordingView {
        fn chart_events(&self) -> usize {
            self.events
                .iter()
                .filter(|e| {
                    matches!(
                        e,
                        ViewEvent::MonthlySales(_)
                            | ViewEvent::TopProducts(_)
                            | ViewEvent::SalesByCity(_)
                    )
                })
                .count()
        }

        fn errors(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Error(msg) => Some(msg.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DashboardView for RecordingView {
        fn show_loading(&mut self) {
            self.events.push(ViewEvent::Loading);
        }

        fn render_summary(&mut self, cards: Vec<SummaryCard>) {
            self.events.push(ViewEvent::Summary(cards));
        }

        fn render_monthly_sales(&mut self, chart: ChartSpec) {
            self.events.push(ViewEvent::MonthlySales(chart));
        }

        fn render_top_products(&mut self, chart: ChartSpec) {
            self.events.push(ViewEvent::TopProducts(chart));
        }

        fn render_sales_by_city(&mut self, chart: ChartSpec) {
            self.events.push(ViewEvent::SalesByCity(chart));
        }

        fn show_error(&mut self, message: &str) {
            self.events.push(ViewEvent::Error(message.to_string()));
        }
    }

    #[tokio::test]
    async fn test_initialize_renders_all_regions() {
        let mut controller = DashboardController::new(MockApi::canned(), RecordingView::default());
        assert!(controller.initialize().await.is_ok());

        let (api, view) = controller.into_parts();
        assert_eq!(
            api.calls(),
            vec!["summary", "monthly-sales", "top-products", "sales-by-city"]
        );
        assert_eq!(view.events.len(), 5);
        assert_eq!(view.events[0], ViewEvent::Loading);

        match &view.events[1] {
            ViewEvent::Summary(cards) => {
                assert_eq!(cards.len(), 4);
                assert_eq!(cards[0].value, "Rp 1.234.567");
                assert_eq!(cards[1].value, "42");
            }
            other => panic!("expected summary, got {other:?}"),
        }
        match &view.events[2] {
            ViewEvent::MonthlySales(chart) => assert_eq!(chart.point_count(), 3),
            other => panic!("expected monthly sales, got {other:?}"),
        }
        match &view.events[3] {
            ViewEvent::TopProducts(chart) => assert_eq!(chart.point_count(), 2),
            other => panic!("expected top products, got {other:?}"),
        }
        match &view.events[4] {
            ViewEvent::SalesByCity(chart) => assert_eq!(chart.point_count(), 4),
            other => panic!("expected sales by city, got {other:?}"),
        }
        assert!(view.errors().is_empty());
    }

    #[tokio::test]
    async fn test_summary_failure_skips_charts() {
        let mut api = MockApi::canned();
        api.summary = Err(FetchError::HttpStatus { status: 500 });

        let mut controller = DashboardController::new(api, RecordingView::default());
        let result = controller.initialize().await;
        assert_eq!(result, Err(FetchError::HttpStatus { status: 500 }));

        let (api, view) = controller.into_parts();
        assert_eq!(api.calls(), vec!["summary"]);
        assert_eq!(view.chart_events(), 0);
        assert_eq!(view.errors(), vec![LOAD_ERROR_MESSAGE]);
    }

    #[tokio::test]
    async fn test_midway_failure_stops_remaining_steps() {
        let mut api = MockApi::canned();
        api.products = Err(FetchError::Parse("expected value at line 1".into()));

        let mut controller = DashboardController::new(api, RecordingView::default());
        assert!(controller.initialize().await.is_err());

        let (api, view) = controller.into_parts();
        assert_eq!(api.calls(), vec!["summary", "monthly-sales", "top-products"]);
        assert_eq!(view.chart_events(), 1);
        assert_eq!(view.errors().len(), 1);
        assert!(matches!(view.events.last(), Some(ViewEvent::Error(_))));
    }

    #[tokio::test]
    async fn test_network_error_is_reported_like_others() {
        let mut api = MockApi::canned();
        api.cities = Err(FetchError::Network("failed to fetch".into()));

        let mut controller = DashboardController::new(api, RecordingView::default());
        assert!(controller.initialize().await.is_err());
        assert_eq!(controller.view().errors(), vec![LOAD_ERROR_MESSAGE]);
        assert_eq!(controller.view().chart_events(), 2);
    }

    #[tokio::test]
    async fn test_repeated_load_renders_identical_output() {
        let mut controller = DashboardController::new(MockApi::canned(), RecordingView::default());
        controller.initialize().await.unwrap();
        controller.initialize().await.unwrap();

        let events = &controller.view().events;
        assert_eq!(events.len(), 10);
        let (first, second) = events.split_at(5);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_datasets_render_empty_charts() {
        let mut api = MockApi::canned();
        api.monthly = Ok(Vec::new());
        api.products = Ok(Vec::new());
        api.cities = Ok(Vec::new());

        let mut controller = DashboardController::new(api, RecordingView::default());
        assert!(controller.initialize().await.is_ok());
        assert_eq!(controller.view().chart_events(), 3);
        for event in &controller.view().events {
            match event {
                ViewEvent::MonthlySales(c) | ViewEvent::TopProducts(c) | ViewEvent::SalesByCity(c) => {
                    assert_eq!(c.point_count(), 0)
                }
                _ => {}
            }
        }
    }
}
