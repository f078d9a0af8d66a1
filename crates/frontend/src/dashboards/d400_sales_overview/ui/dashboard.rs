use crate::dashboards::d400_sales_overview::api::HttpSalesApi;
use crate::dashboards::d400_sales_overview::cards::SummaryCard;
use crate::dashboards::d400_sales_overview::chart_js::ChartRegistry;
use crate::dashboards::d400_sales_overview::charts::{
    ChartSpec, MONTHLY_SALES_CANVAS, SALES_BY_CITY_CANVAS, TOP_PRODUCTS_CANVAS,
};
use crate::dashboards::d400_sales_overview::controller::{DashboardController, DashboardView};
use crate::shared::components::stat_card::{StatCard, StatPanel};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Container the summary cards are rendered into
pub const SUMMARY_CARDS_ID: &str = "summaryCards";

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryState {
    Loading,
    Ready(Vec<SummaryCard>),
    Failed(String),
}

/// [`DashboardView`] writing into the component's signals and canvases
struct LeptosDashboardView {
    summary: RwSignal<SummaryState>,
    charts: StoredValue<ChartRegistry, LocalStorage>,
}

impl LeptosDashboardView {
    fn draw(&mut self, chart: ChartSpec) {
        self.charts.update_value(|registry| {
            if let Err(err) = registry.render(&chart) {
                log::error!("Failed to render chart #{}: {:?}", chart.canvas_id, err);
            }
        });
    }
}

impl DashboardView for LeptosDashboardView {
    fn show_loading(&mut self) {
        self.summary.set(SummaryState::Loading);
    }

    fn render_summary(&mut self, cards: Vec<SummaryCard>) {
        self.summary.set(SummaryState::Ready(cards));
    }

    fn render_monthly_sales(&mut self, chart: ChartSpec) {
        self.draw(chart);
    }

    fn render_top_products(&mut self, chart: ChartSpec) {
        self.draw(chart);
    }

    fn render_sales_by_city(&mut self, chart: ChartSpec) {
        self.draw(chart);
    }

    fn show_error(&mut self, message: &str) {
        self.summary.set(SummaryState::Failed(message.to_string()));
    }
}

/// Sales overview: four summary cards and three charts
#[component]
pub fn SalesOverviewDashboard(
    /// Base URL of the sales API, e.g. "http://localhost:5000/api"
    #[prop(into)]
    api_base: String,
) -> impl IntoView {
    let summary = RwSignal::new(SummaryState::Loading);
    // Chart instances are JS objects, keep them on this thread
    let charts = StoredValue::new_local(ChartRegistry::default());
    let api = StoredValue::new(HttpSalesApi::new(api_base));
    let (loading, set_loading) = signal(false);

    let load = move || {
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);

        let api = api.get_value();
        spawn_local(async move {
            let view = LeptosDashboardView { summary, charts };
            let mut controller = DashboardController::new(api, view);
            if controller.initialize().await.is_err() {
                log::warn!("Sales dashboard loaded with errors");
            }
            set_loading.set(false);
        });
    };

    // Canvases exist once the component is mounted
    Effect::new(move |_| load());

    view! {
        <PageFrame page_id="d400_sales_overview--dashboard" class="sales-dashboard">
            <div class="page__header">
                <h1 class="page__title">"Sales Dashboard"</h1>
                <button
                    class="button button--ghost"
                    disabled=move || loading.get()
                    on:click=move |_| load()
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>

            <div id=SUMMARY_CARDS_ID class="summary-cards">
                {move || match summary.get() {
                    SummaryState::Loading => view! {
                        <StatPanel icon_name="refresh" title="Loading dashboard data..." />
                    }.into_any(),
                    SummaryState::Ready(cards) => cards
                        .into_iter()
                        .map(|card| view! {
                            <StatCard label=card.label icon_name=card.icon value=card.value />
                        })
                        .collect_view()
                        .into_any(),
                    SummaryState::Failed(message) => view! {
                        <StatPanel icon_name="alert" title="Error" message=message error=true />
                    }.into_any(),
                }}
            </div>

            <div class="charts-grid">
                <ChartPanel title="Monthly Sales Trend" canvas_id=MONTHLY_SALES_CANVAS wide=true />
                <ChartPanel title="Top Products" canvas_id=TOP_PRODUCTS_CANVAS />
                <ChartPanel title="Sales by City" canvas_id=SALES_BY_CITY_CANVAS />
            </div>
        </PageFrame>
    }
}

#[component]
fn ChartPanel(
    title: &'static str,
    canvas_id: &'static str,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let class = if wide {
        "chart-card chart-card--wide"
    } else {
        "chart-card"
    };

    view! {
        <div class=class>
            <h3 class="chart-card__title">{title}</h3>
            <div class="chart-card__body">
                <canvas id=canvas_id></canvas>
            </div>
        </div>
    }
}
