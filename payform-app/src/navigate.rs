//! Browser-navigation seam.
//!
//! The controller only ever asks to navigate; what that means is up to the
//! embedding surface. The binary prints the target URL, tests record it.

use url::Url;

/// Performs the final redirect to the hosted checkout page.
pub trait Navigate: Send + Sync {
    fn navigate(&self, url: &Url);
}

/// Prints the checkout URL to standard output.
#[derive(Debug, Default)]
pub struct StdoutNavigator;

impl Navigate for StdoutNavigator {
    fn navigate(&self, url: &Url) {
        println!("Continue your checkout at {url}");
    }
}
