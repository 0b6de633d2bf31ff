//! The pre-configured submission payload.
//!
//! This order is the single source the form is pre-filled from AND the
//! payload actually sent on submit. Edits to the displayed fields stay in
//! [`crate::form::CheckoutFields`] and never reach the wire; swapping that
//! behavior means submitting the fields instead of this order in the
//! controller.

use payform_sdk::objects::{Consumer, Item, MerchantUrls, Money, Order, ShippingAddress};
use rust_decimal_macros::dec;
use url::Url;

/// The demo order: two clothing items, 190.00 EUR total, shipped within
/// Italy, with integration-portal redirect targets.
pub fn sample_order() -> Order {
    Order {
        total_amount: Money {
            amount: dec!(190.00),
            currency: "EUR".into(),
        },
        consumer: Consumer {
            phone_number: "0400000001".to_owned(),
            given_names: "Joe".to_owned(),
            surname: "Consumer".to_owned(),
            email: "test@scalapay.com".to_owned(),
        },
        shipping: ShippingAddress {
            name: "Joe Consumer".to_owned(),
            line1: "Via della Rosa, 58".to_owned(),
            suburb: "Montelupo Fiorentino".to_owned(),
            postcode: "50056".to_owned(),
            country_code: "IT".into(),
            phone_number: "0400000000".to_owned(),
        },
        items: vec![
            Item {
                name: "T-Shirt".to_owned(),
                category: "clothes".to_owned(),
                subcategory: vec!["shirt".to_owned(), "long-sleeve".to_owned()],
                brand: "TopChoice".to_owned(),
                gtin: "123458791330".to_owned(),
                sku: "12341234".to_owned(),
                quantity: 1,
                price: Money {
                    amount: dec!(10.00),
                    currency: "EUR".into(),
                },
            },
            Item {
                name: "Jeans".to_owned(),
                category: "clothes".to_owned(),
                subcategory: vec!["pants".to_owned(), "jeans".to_owned()],
                brand: "TopChoice".to_owned(),
                gtin: "123458722222".to_owned(),
                sku: "12341235".to_owned(),
                quantity: 1,
                price: Money {
                    amount: dec!(20.00),
                    currency: "EUR".into(),
                },
            },
        ],
        merchant: MerchantUrls {
            redirect_confirm_url: portal_url("success-url"),
            redirect_cancel_url: portal_url("failure-url"),
        },
    }
}

fn portal_url(path: &str) -> Url {
    let raw = format!("https://portal.integration.scalapay.com/{path}");
    Url::parse(&raw).expect("static portal URL is well-formed")
}
