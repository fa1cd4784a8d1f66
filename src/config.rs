use std::time::Duration;

/// Local development receiver the binary always targets.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:8000/webhook/stripe/";

/// Where and how the probe request is sent.
///
/// `Default` reproduces the fixed scenario: the local receiver, no
/// timeout, no signature header.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Target URL for the POST.
    pub target_url: String,

    /// Upper bound on the whole request. `None` waits for the transport.
    pub timeout: Option<Duration>,

    /// Secret for the `Stripe-Signature` header. Unsigned when `None`.
    pub signing_secret: Option<Vec<u8>>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout: None,
            signing_secret: None,
        }
    }
}

impl ProbeConfig {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sign requests the way the receiver checks them in production mode.
    pub fn with_signing_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.signing_secret = Some(secret.into());
        self
    }
}
