//! Order-creation client (checkout surface → order service).
//!
//! Every request carries the static bearer token from the injected
//! [`ApiConfig`] and participates in the service's cookie session.

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::config::ApiConfig;
use crate::objects::create_order::{CreateOrderResponse, CreatedOrder};
use crate::objects::order::Order;

/// Path of the order-creation endpoint, relative to the configured base URL.
const CREATE_ORDER_PATH: &str = "/v2/orders";

/// Typed HTTP client for the payment order service.
///
/// Connection settings are captured once at construction; rotating the
/// bearer token means building a new client.
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl OrderClient {
    /// Create a new `OrderClient` from the process-wide configuration.
    ///
    /// The underlying `reqwest::Client` keeps a cookie store so the
    /// service's session cookies are sent back on subsequent requests.
    pub fn new(config: ApiConfig) -> Self {
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: config.base_url,
            token: config.token,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /v2/orders` – create a payment order.
    ///
    /// Returns the created order carrying the hosted checkout URL the
    /// consumer should be redirected to.
    pub async fn create_order(&self, order: &Order) -> Result<CreatedOrder, ClientError> {
        let url = self.base_url.join(CREATE_ORDER_PATH)?;

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(order)
            .send()
            .await?;

        let response: CreateOrderResponse = parse_response(resp).await?;
        Ok(response.data)
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
