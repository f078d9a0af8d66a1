use crate::shared::icons::icon;
use leptos::prelude::*;

/// Fixed-layout tile showing one aggregate metric
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    value: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}

/// Full-width panel shown in place of the cards
#[component]
pub fn StatPanel(
    icon_name: &'static str,
    title: &'static str,
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error {
        "stat-card stat-card--wide stat-card--error"
    } else {
        "stat-card stat-card--wide"
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{title}</div>
                {message.map(|m| view! { <div class="stat-card__subtitle">{m}</div> })}
            </div>
        </div>
    }
}
