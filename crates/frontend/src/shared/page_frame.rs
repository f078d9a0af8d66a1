//! PageFrame — standard root wrapper for a dashboard page.
//!
//! Sets the `id` (`"{entity}--{category}"`, e.g. `"d400_sales_overview--dashboard"`)
//! and `data-page-category` attributes on the root DOM element.

use leptos::prelude::*;

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=PAGE_CAT_DASHBOARD
        >
            {children()}
        </div>
    }
}
