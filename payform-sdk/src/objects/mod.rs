//! Request and response types for the order service.
//!
//! All payloads serialize to the camelCase JSON the service speaks.

pub mod create_order;
pub mod order;

pub use create_order::{CreateOrderResponse, CreatedOrder};
pub use order::{Consumer, Item, MerchantUrls, Money, Order, ShippingAddress};
