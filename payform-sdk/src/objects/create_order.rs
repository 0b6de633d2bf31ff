//! Order-creation response types.

use serde::{Deserialize, Serialize};
use url::Url;

/// Response envelope returned by the order-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub data: CreatedOrder,
}

/// A successfully created payment order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    /// Hosted checkout page the consumer should be redirected to.
    pub checkout_url: Url,
}
