//! HTTP transport for the storefront API

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use shared::{
    ApiOutcome, Availability, AvailabilityQuery, OrderConfirmation, OrderSubmission,
    ReservationRequest,
};

use crate::{ClientConfig, ClientResult};

/// The four operations the storefront performs against the backend.
///
/// The trait seam lets the UI run against a test double instead of a live
/// server.
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// POST /api/reservations
    async fn create_reservation(&self, request: &ReservationRequest) -> ClientResult<ApiOutcome>;

    /// GET /api/check-availability
    async fn check_availability(&self, query: &AvailabilityQuery) -> ClientResult<Availability>;

    /// POST /api/orders
    async fn create_order(&self, order: &OrderSubmission) -> ClientResult<OrderConfirmation>;

    /// POST /api/subscribe (form-encoded)
    async fn subscribe(&self, email: &str) -> ClientResult<ApiOutcome>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // The backend reports rejections in the body (`success: false`), not
    // via HTTP status, so the body is decoded regardless of status code.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        Ok(response.json().await?)
    }
}

#[async_trait]
impl RestaurantApi for HttpApiClient {
    async fn create_reservation(&self, request: &ReservationRequest) -> ClientResult<ApiOutcome> {
        let response = self
            .client
            .post(self.url("/api/reservations"))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn check_availability(&self, query: &AvailabilityQuery) -> ClientResult<Availability> {
        let guests = query.guests.to_string();
        let response = self
            .client
            .get(self.url("/api/check-availability"))
            .query(&[
                ("date", query.date.as_str()),
                ("time", query.time.as_str()),
                ("guests", guests.as_str()),
            ])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create_order(&self, order: &OrderSubmission) -> ClientResult<OrderConfirmation> {
        let response = self
            .client
            .post(self.url("/api/orders"))
            .json(order)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn subscribe(&self, email: &str) -> ClientResult<ApiOutcome> {
        let response = self
            .client
            .post(self.url("/api/subscribe"))
            .form(&[("email", email)])
            .send()
            .await?;
        Self::decode(response).await
    }
}
