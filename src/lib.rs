//! A one-shot webhook prober for local Stripe receivers.
//!
//! Builds a synthetic `checkout.session.completed` event with random
//! test identifiers, POSTs it once to a webhook endpoint and prints
//! what the endpoint answered.
//!
//! ## Guarantees
//! - Exactly one request per run
//! - Failures are reported, never raised
//!
//! ## Non-Guarantees
//! - Retries or backoff
//! - Unique identifiers across runs
//! - Verifying signatures on the receiving side
//!
//! This crate is a manual diagnostic tool, not a test harness.

mod config;
mod error;
mod probe;
mod signing;
mod types;

pub use config::{ProbeConfig, DEFAULT_WEBHOOK_URL};
pub use error::ProbeError;
pub use probe::{Prober, ProbeResponse};
pub use signing::{compute_signature, signature_header, STRIPE_SIGNATURE_HEADER};
pub use types::{
    synthetic_id,
    CheckoutSession,
    EventData,
    EventPayload,
    SessionMetadata,
    CHECKOUT_SESSION_COMPLETED,
    CUSTOMER_ID_PREFIX,
    PAYMENT_INTENT_ID_PREFIX,
    SESSION_ID_PREFIX,
    SUBSCRIPTION_ID_PREFIX,
    SYNTHETIC_ID_RANGE,
};
