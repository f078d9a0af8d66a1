use crate::dashboards::SalesOverviewDashboard;
use crate::shared::api_utils::api_base;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let base = api_base();
    log::info!("Sales dashboard using API at {}", base);

    view! {
        <SalesOverviewDashboard api_base=base />
    }
}
