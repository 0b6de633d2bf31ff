//! Plain-text rendering of the checkout form.
//!
//! [`FormView`] is a cheap borrow over the controller; formatting walks the
//! current field values, inline errors, the display-only item list, and the
//! transient success banner. Rendering performs no I/O.

use std::fmt;

use crate::controller::{OrderFormController, SubmitPhase};
use crate::form::CheckoutFields;

impl OrderFormController {
    /// A renderable snapshot of the form.
    pub fn view(&self) -> FormView<'_> {
        FormView { controller: self }
    }
}

/// Display adapter for the whole form.
pub struct FormView<'a> {
    controller: &'a OrderFormController,
}

impl FormView<'_> {
    fn field(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        value: &str,
        field: &'static str,
    ) -> fmt::Result {
        writeln!(f, "  {label:<14} {value}")?;
        if let Some(message) = self.controller.errors().get(field) {
            writeln!(f, "      ! {message}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: &CheckoutFields = self.controller.fields();
        let order = self.controller.submission();

        writeln!(f, "Create order")?;
        writeln!(f)?;

        writeln!(f, "Customer:")?;
        self.field(f, "Phone number:", &fields.consumer_phone_number, "consumer_phone_number")?;
        self.field(f, "Given name:", &fields.consumer_given_names, "consumer_given_names")?;
        self.field(f, "Surname:", &fields.consumer_surname, "consumer_surname")?;
        self.field(f, "Email:", &fields.consumer_email, "consumer_email")?;
        writeln!(f)?;

        writeln!(f, "Shipping:")?;
        self.field(f, "Name:", &fields.shipping_name, "shipping_name")?;
        self.field(f, "Address line:", &fields.shipping_line1, "shipping_line1")?;
        self.field(f, "City:", &fields.shipping_suburb, "shipping_suburb")?;
        self.field(f, "Postcode:", &fields.shipping_postcode, "shipping_postcode")?;
        self.field(f, "Country code:", &fields.shipping_country_code, "shipping_country_code")?;
        self.field(f, "Phone number:", &fields.shipping_phone_number, "shipping_phone_number")?;
        writeln!(f)?;

        writeln!(f, "Items:")?;
        for item in &order.items {
            write!(
                f,
                "  - {} ({}) sku {} x{}  {} {}",
                item.name, item.category, item.sku, item.quantity,
                item.price.amount, item.price.currency,
            )?;
            for sub in &item.subcategory {
                write!(f, "  #{sub}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Total: {} {}",
            order.total_amount.amount, order.total_amount.currency
        )?;
        writeln!(f)?;

        // The submit control is disabled while a submission is pending.
        match self.controller.phase() {
            SubmitPhase::Idle => writeln!(f, "[ Order ]")?,
            SubmitPhase::Submitting | SubmitPhase::RedirectPending => {
                writeln!(f, "[ Order ] (disabled)")?
            }
        }

        if self.controller.created() {
            writeln!(f)?;
            writeln!(f, "Order created successfully! Redirecting to checkout…")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use payform_sdk::client::OrderClient;
    use payform_sdk::config::ApiConfig;
    use url::Url;

    use crate::controller::OrderFormController;
    use crate::navigate::StdoutNavigator;
    use crate::sample::sample_order;

    fn controller() -> OrderFormController {
        let config = ApiConfig::new(Url::parse("https://unused.example.com").unwrap(), "t");
        OrderFormController::new(sample_order(), OrderClient::new(config), Arc::new(StdoutNavigator))
    }

    #[test]
    fn renders_prefilled_fields_items_and_total() {
        let rendered = controller().view().to_string();

        assert!(rendered.contains("Customer:"));
        assert!(rendered.contains("0400000001"));
        assert!(rendered.contains("test@scalapay.com"));
        assert!(rendered.contains("Via della Rosa, 58"));
        assert!(rendered.contains("T-Shirt (clothes) sku 12341234 x1"));
        assert!(rendered.contains("#long-sleeve"));
        assert!(rendered.contains("Total: 190.00 EUR"));
        assert!(rendered.contains("[ Order ]"));
        assert!(!rendered.contains("Order created successfully"));
    }

    #[tokio::test]
    async fn renders_errors_under_the_offending_field_after_submit() {
        let mut controller = controller();
        controller.fields_mut().consumer_phone_number = "12345".to_owned();

        // Validation fails before any request is built, so the unused
        // client address is never contacted.
        let _ = controller.submit().await;

        let rendered = controller.view().to_string();
        assert!(rendered.contains("! Phone number must be 10 or 11 digits"));
    }
}
