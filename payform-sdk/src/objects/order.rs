//! Order payload types.
//!
//! An [`Order`] is the full record submitted to create a payment order.
//! The service expects camelCase keys and monetary amounts as decimal
//! strings, so every struct here renames accordingly and [`Money`] routes
//! its amount through [`rust_decimal::serde::str`].

use compact_str::CompactString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

/// A monetary value as it appears on the wire: a decimal string plus an
/// ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: CompactString,
}

/// The consumer placing the order.
///
/// Phone numbers are digit-only strings of 10 or 11 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumer {
    pub phone_number: String,
    pub given_names: String,
    pub surname: String,
    pub email: String,
}

/// Shipping destination for the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    pub suburb: String,
    pub postcode: String,
    /// Two-letter country code.
    pub country_code: CompactString,
    pub phone_number: String,
}

/// A single order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub category: String,
    pub subcategory: Vec<String>,
    pub brand: String,
    pub gtin: String,
    pub sku: String,
    pub quantity: u32,
    pub price: Money,
}

/// Post-checkout redirect targets.
///
/// Forwarded verbatim to the service; this client never navigates to them
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantUrls {
    pub redirect_confirm_url: Url,
    pub redirect_cancel_url: Url,
}

/// The payload submitted to create a payment order.
///
/// `items` must be non-empty and every amount non-negative; the service
/// rejects orders that violate either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub total_amount: Money,
    pub consumer: Consumer,
    pub shipping: ShippingAddress,
    pub items: Vec<Item>,
    pub merchant: MerchantUrls,
}
