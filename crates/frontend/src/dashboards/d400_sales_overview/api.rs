use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::dashboards::d400_sales_overview::{
    CityRevenue, MonthlySalesPoint, ProductRevenue, SummaryMetrics, MONTHLY_SALES_PATH,
    SALES_BY_CITY_PATH, SUMMARY_PATH, TOP_PRODUCTS_PATH,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a dashboard request failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::Parse(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

/// GET `base + endpoint` and decode the JSON body
pub async fn fetch_json<T: DeserializeOwned>(base: &str, endpoint: &str) -> Result<T, FetchError> {
    let url = api_url(base, endpoint);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("Error fetching data from {}: {}", endpoint, e);
        FetchError::from(e)
    })?;

    if !response.ok() {
        let err = FetchError::HttpStatus {
            status: response.status(),
        };
        log::error!("Error fetching data from {}: {}", endpoint, err);
        return Err(err);
    }

    response.json::<T>().await.map_err(|e| {
        log::error!("Error fetching data from {}: {}", endpoint, e);
        FetchError::from(e)
    })
}

/// Source of the four sales overview datasets
#[async_trait(?Send)]
pub trait SalesApi {
    async fn summary(&self) -> Result<SummaryMetrics, FetchError>;
    async fn monthly_sales(&self) -> Result<Vec<MonthlySalesPoint>, FetchError>;
    async fn top_products(&self) -> Result<Vec<ProductRevenue>, FetchError>;
    async fn sales_by_city(&self) -> Result<Vec<CityRevenue>, FetchError>;
}

/// [`SalesApi`] backed by the HTTP endpoints under `base`
#[derive(Debug, Clone)]
pub struct HttpSalesApi {
    base: String,
}

impl HttpSalesApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl SalesApi for HttpSalesApi {
    async fn summary(&self) -> Result<SummaryMetrics, FetchError> {
        fetch_json(&self.base, SUMMARY_PATH).await
    }

    async fn monthly_sales(&self) -> Result<Vec<MonthlySalesPoint>, FetchError> {
        fetch_json(&self.base, MONTHLY_SALES_PATH).await
    }

    async fn top_products(&self) -> Result<Vec<ProductRevenue>, FetchError> {
        fetch_json(&self.base, TOP_PRODUCTS_PATH).await
    }

    async fn sales_by_city(&self) -> Result<Vec<CityRevenue>, FetchError> {
        fetch_json(&self.base, SALES_BY_CITY_PATH).await
    }
}
