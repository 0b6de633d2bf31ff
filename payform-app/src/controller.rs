//! Order form controller.
//!
//! Owns the editable field state, the decoupled submission payload, and the
//! submit → confirm → redirect sequence. One submission moves through
//! `Idle → Submitting → RedirectPending`; validation failures and HTTP
//! failures both land back in `Idle` with the form resubmittable.

use std::sync::Arc;
use std::time::Duration;

use payform_sdk::client::OrderClient;
use payform_sdk::objects::Order;
use tokio::task::JoinHandle;
use url::Url;

use crate::form::{CheckoutFields, FieldErrors};
use crate::navigate::Navigate;

/// Delay between the confirmation banner appearing and the redirect firing.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Where the current submission attempt stands.
///
/// Validation is synchronous, so there is no observable validating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    RedirectPending,
}

/// Outcome of one call to [`OrderFormController::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; no network contact was made.
    Invalid(FieldErrors),
    /// The order was created; a redirect to `checkout_url` is scheduled.
    Created { checkout_url: Url },
    /// The request failed. The detail went to the diagnostic log only; the
    /// form is unchanged and may be resubmitted.
    Failed,
    /// A submission is already in flight or a redirect is pending; the
    /// submit control is disabled for the duration.
    AlreadyPending,
}

/// A scheduled redirect to the hosted checkout page.
///
/// The underlying task is aborted on [`cancel`](Self::cancel) and on drop,
/// so tearing the controller down never leaves a timer behind.
#[derive(Debug)]
pub struct RedirectHandle {
    task: JoinHandle<()>,
}

impl RedirectHandle {
    fn schedule(navigator: Arc<dyn Navigate>, url: Url, delay: Duration) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(url = %url, "redirecting to hosted checkout");
            navigator.navigate(&url);
        });
        Self { task }
    }

    /// Cancel the pending redirect.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait for the redirect to fire.
    pub async fn wait(&mut self) {
        let _ = (&mut self.task).await;
    }
}

impl Drop for RedirectHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// The checkout form: pre-filled fields, one submit operation, one redirect.
pub struct OrderFormController {
    fields: CheckoutFields,
    /// The order actually sent on submit. Deliberately decoupled from
    /// `fields`: edits to the displayed values never reach the wire.
    submission: Order,
    client: OrderClient,
    navigator: Arc<dyn Navigate>,
    phase: SubmitPhase,
    created: bool,
    errors: FieldErrors,
    redirect: Option<RedirectHandle>,
}

impl OrderFormController {
    /// Build a controller around a submission payload.
    ///
    /// The form fields are pre-filled from the same payload.
    pub fn new(submission: Order, client: OrderClient, navigator: Arc<dyn Navigate>) -> Self {
        Self {
            fields: CheckoutFields::prefill(&submission),
            submission,
            client,
            navigator,
            phase: SubmitPhase::Idle,
            created: false,
            errors: FieldErrors::default(),
            redirect: None,
        }
    }

    /// Validate the form and, if clean, create the order.
    ///
    /// On success the confirmation flag is set immediately and the redirect
    /// fires after [`REDIRECT_DELAY`]. On HTTP failure the error detail is
    /// logged and the form returns to `Idle` untouched.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.phase != SubmitPhase::Idle {
            return SubmitOutcome::AlreadyPending;
        }

        let errors = self.fields.field_errors();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }
        self.errors = FieldErrors::default();

        self.phase = SubmitPhase::Submitting;
        match self.client.create_order(&self.submission).await {
            Ok(created) => {
                let checkout_url = created.checkout_url;
                tracing::info!(url = %checkout_url, "order created, redirect scheduled");

                self.created = true;
                self.phase = SubmitPhase::RedirectPending;
                self.redirect = Some(RedirectHandle::schedule(
                    self.navigator.clone(),
                    checkout_url.clone(),
                    REDIRECT_DELAY,
                ));
                SubmitOutcome::Created { checkout_url }
            }
            Err(error) => {
                tracing::error!(error = %error, "order creation request failed");
                self.phase = SubmitPhase::Idle;
                SubmitOutcome::Failed
            }
        }
    }

    /// Take ownership of the pending redirect, if any.
    pub fn take_redirect(&mut self) -> Option<RedirectHandle> {
        self.redirect.take()
    }

    pub fn fields(&self) -> &CheckoutFields {
        &self.fields
    }

    /// Mutable access to the editable fields.
    ///
    /// The rendered surface keeps every input read-only, so only tests
    /// exercise edits.
    #[cfg(test)]
    pub fn fields_mut(&mut self) -> &mut CheckoutFields {
        &mut self.fields
    }

    /// The payload that will be sent on submit.
    pub fn submission(&self) -> &Order {
        &self.submission
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Whether the confirmation banner should be shown.
    pub fn created(&self) -> bool {
        self.created
    }

    /// Field errors from the last submit attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_order;
    use std::sync::Mutex;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Records every navigation target instead of going anywhere.
    #[derive(Debug, Default)]
    struct RecordingNavigator(Mutex<Vec<Url>>);

    impl RecordingNavigator {
        fn targets(&self) -> Vec<String> {
            self.0
                .lock()
                .unwrap()
                .iter()
                .map(|url| url.to_string())
                .collect()
        }
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, url: &Url) {
            self.0.lock().unwrap().push(url.clone());
        }
    }

    fn controller_for(
        server: &MockServer,
        navigator: Arc<RecordingNavigator>,
    ) -> OrderFormController {
        let config = payform_sdk::config::ApiConfig::new(
            Url::parse(&server.uri()).unwrap(),
            "test-token",
        );
        OrderFormController::new(sample_order(), OrderClient::new(config), navigator)
    }

    async fn mount_success(server: &MockServer, checkout_url: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/v2/orders"))
            .and(body_json(sample_order()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "checkoutUrl": checkout_url }
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    async fn mount_refusal(server: &MockServer) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submission_shows_banner_then_redirects() {
        let server = MockServer::start().await;
        mount_success(&server, "https://x/y", 1).await;

        let navigator = Arc::new(RecordingNavigator::default());
        let mut controller = controller_for(&server, navigator.clone());

        let outcome = controller.submit().await;
        let SubmitOutcome::Created { checkout_url } = outcome else {
            panic!("expected created outcome, got {outcome:?}");
        };
        assert_eq!(checkout_url.as_str(), "https://x/y");

        // Banner first, navigation only after the delay.
        assert!(controller.created());
        assert_eq!(controller.phase(), SubmitPhase::RedirectPending);
        assert!(
            controller
                .view()
                .to_string()
                .contains("Order created successfully")
        );
        assert!(navigator.targets().is_empty());

        controller.take_redirect().unwrap().wait().await;
        assert_eq!(navigator.targets(), vec!["https://x/y".to_owned()]);
    }

    #[tokio::test]
    async fn resubmit_while_redirect_pending_is_rejected() {
        let server = MockServer::start().await;
        mount_success(&server, "https://x/y", 1).await;

        let navigator = Arc::new(RecordingNavigator::default());
        let mut controller = controller_for(&server, navigator);

        let first = controller.submit().await;
        assert!(matches!(first, SubmitOutcome::Created { .. }));

        let second = controller.submit().await;
        assert!(matches!(second, SubmitOutcome::AlreadyPending));
    }

    #[tokio::test]
    async fn short_phone_number_blocks_submission_without_network() {
        let server = MockServer::start().await;
        mount_refusal(&server).await;

        let navigator = Arc::new(RecordingNavigator::default());
        let mut controller = controller_for(&server, navigator.clone());
        controller.fields_mut().consumer_phone_number = "12345".to_owned();

        let outcome = controller.submit().await;
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid outcome, got {outcome:?}");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.get("consumer_phone_number").is_some());

        assert!(!controller.created());
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert!(navigator.targets().is_empty());
    }

    #[tokio::test]
    async fn empty_required_field_blocks_submission_without_network() {
        let server = MockServer::start().await;
        mount_refusal(&server).await;

        let navigator = Arc::new(RecordingNavigator::default());
        let mut controller = controller_for(&server, navigator);
        controller.fields_mut().shipping_name.clear();

        let outcome = controller.submit().await;
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid outcome, got {outcome:?}");
        };
        assert!(errors.get("shipping_name").is_some());
    }

    #[tokio::test]
    async fn failed_request_leaves_form_resubmittable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/orders"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(2)
            .mount(&server)
            .await;

        let navigator = Arc::new(RecordingNavigator::default());
        let mut controller = controller_for(&server, navigator.clone());

        let outcome = controller.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Failed));
        assert!(!controller.created());
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert!(navigator.targets().is_empty());
        assert!(controller.take_redirect().is_none());

        // The failure is silent in the UI and the form stays submittable.
        let again = controller.submit().await;
        assert!(matches!(again, SubmitOutcome::Failed));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_redirect_never_navigates() {
        let server = MockServer::start().await;
        mount_success(&server, "https://x/y", 1).await;

        let navigator = Arc::new(RecordingNavigator::default());
        let mut controller = controller_for(&server, navigator.clone());

        let outcome = controller.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Created { .. }));

        let redirect = controller.take_redirect().unwrap();
        redirect.cancel();
        drop(redirect);

        tokio::time::sleep(REDIRECT_DELAY * 2).await;
        assert!(navigator.targets().is_empty());
    }

    #[tokio::test]
    async fn rendering_alone_never_contacts_the_service() {
        let server = MockServer::start().await;
        mount_refusal(&server).await;

        let navigator = Arc::new(RecordingNavigator::default());
        let controller = controller_for(&server, navigator);

        // Render twice; the mock's expect(0) verifies on drop.
        let first = controller.view().to_string();
        let second = controller.view().to_string();
        assert_eq!(first, second);
    }
}
