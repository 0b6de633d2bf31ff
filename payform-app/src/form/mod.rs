//! Editable form state and its validation.
//!
//! [`CheckoutFields`] holds the consumer and shipping fields the form lets
//! the user edit, pre-filled from the submission payload. Item and total
//! data stay display-only and never get a field here.
//!
//! Validation never short-circuits: every failing field is reported in the
//! same [`FieldErrors`] pass.

pub mod rules;

use std::borrow::Cow;
use std::collections::BTreeMap;

use payform_sdk::objects::Order;
use validator::{Validate, ValidationErrors};

/// The editable checkout fields.
///
/// Field names double as the error keys in [`FieldErrors`].
#[derive(Debug, Clone, Validate)]
pub struct CheckoutFields {
    #[validate(custom = "crate::form::rules::phone_number")]
    pub consumer_phone_number: String,
    #[validate(length(min = 1, message = "Given name is required"))]
    pub consumer_given_names: String,
    #[validate(length(min = 1, message = "Surname is required"))]
    pub consumer_surname: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub consumer_email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub shipping_name: String,
    #[validate(length(min = 1, message = "Address line is required"))]
    pub shipping_line1: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub shipping_suburb: String,
    #[validate(length(min = 1, message = "Postcode is required"))]
    pub shipping_postcode: String,
    #[validate(custom = "crate::form::rules::country_code")]
    pub shipping_country_code: String,
    #[validate(custom = "crate::form::rules::phone_number")]
    pub shipping_phone_number: String,
}

impl CheckoutFields {
    /// Pre-fill the form from an order.
    ///
    /// This copies values out; later edits to the fields do not feed back
    /// into the order.
    pub fn prefill(order: &Order) -> Self {
        Self {
            consumer_phone_number: order.consumer.phone_number.clone(),
            consumer_given_names: order.consumer.given_names.clone(),
            consumer_surname: order.consumer.surname.clone(),
            consumer_email: order.consumer.email.clone(),
            shipping_name: order.shipping.name.clone(),
            shipping_line1: order.shipping.line1.clone(),
            shipping_suburb: order.shipping.suburb.clone(),
            shipping_postcode: order.shipping.postcode.clone(),
            shipping_country_code: order.shipping.country_code.to_string(),
            shipping_phone_number: order.shipping.phone_number.clone(),
        }
    }

    /// Run every validation rule and collect the failures per field.
    ///
    /// An empty result means the form may be submitted.
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from_validation(errors),
        }
    }
}

/// Per-field validation failures, keyed by field name.
///
/// Only the first failing rule per field is kept; iteration order is
/// deterministic so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    fn from_validation(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, failures) in errors.field_errors() {
            if let Some(first) = failures.first() {
                let message = first
                    .message
                    .clone()
                    .map(Cow::into_owned)
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                map.insert(field, message);
            }
        }
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
