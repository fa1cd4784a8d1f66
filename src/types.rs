use serde::{Deserialize, Serialize};

/// Event type carried by every probe payload.
pub const CHECKOUT_SESSION_COMPLETED: &str = "checkout.session.completed";

/// Exclusive upper bound of the numeric suffix on synthetic identifiers.
pub const SYNTHETIC_ID_RANGE: u32 = 1_000_000;

pub const SESSION_ID_PREFIX: &str = "cs_test_";
pub const CUSTOMER_ID_PREFIX: &str = "cus_test_";
pub const SUBSCRIPTION_ID_PREFIX: &str = "sub_test_";
pub const PAYMENT_INTENT_ID_PREFIX: &str = "pi_test_";

/// Synthetic Stripe-style event sent to the receiver.
///
/// Built fresh for every run and serialized once. Nothing here is
/// persisted or reused between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Event category, serialized as `type`.
    #[serde(rename = "type")]
    pub event_type: String,

    pub data: EventData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub object: CheckoutSession,
}

/// The `data.object` of a `checkout.session.completed` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub customer: String,
    pub subscription: String,
    pub payment_intent: String,
    pub metadata: SessionMetadata,
}

/// Metadata the receiver requires to attribute a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub service_id: String,
    pub user_id: String,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        Self {
            service_id: "1".to_string(),
            user_id: "1".to_string(),
        }
    }
}

impl EventPayload {
    /// Build a completed-checkout event with identifiers drawn from the
    /// thread-local generator.
    pub fn checkout_session_completed() -> Self {
        Self::checkout_session_completed_with(&mut fastrand::Rng::new())
    }

    /// Build a completed-checkout event drawing identifiers from `rng`.
    ///
    /// Each identifier is drawn independently; collisions between fields
    /// or across runs are possible and accepted.
    pub fn checkout_session_completed_with(rng: &mut fastrand::Rng) -> Self {
        Self {
            event_type: CHECKOUT_SESSION_COMPLETED.to_string(),
            data: EventData {
                object: CheckoutSession {
                    id: synthetic_id(SESSION_ID_PREFIX, rng),
                    customer: synthetic_id(CUSTOMER_ID_PREFIX, rng),
                    subscription: synthetic_id(SUBSCRIPTION_ID_PREFIX, rng),
                    payment_intent: synthetic_id(PAYMENT_INTENT_ID_PREFIX, rng),
                    metadata: SessionMetadata::default(),
                },
            },
        }
    }

    /// Serialize to the compact JSON sent as the request body.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Serialize to indented JSON for the console.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Form `<prefix><n>` with `n` uniformly drawn from `[0, SYNTHETIC_ID_RANGE)`.
pub fn synthetic_id(prefix: &str, rng: &mut fastrand::Rng) -> String {
    format!("{}{}", prefix, rng.u32(0..SYNTHETIC_ID_RANGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(id: &str, prefix: &str) -> u32 {
        let rest = id.strip_prefix(prefix).expect("prefix");
        assert!(!rest.is_empty());
        assert!(rest.chars().all(|c| c.is_ascii_digit()));
        rest.parse().expect("numeric suffix")
    }

    #[test]
    fn identifiers_use_distinct_prefixes_and_bounded_suffixes() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..500 {
            let payload = EventPayload::checkout_session_completed_with(&mut rng);
            let session = &payload.data.object;
            assert!(suffix(&session.id, SESSION_ID_PREFIX) < SYNTHETIC_ID_RANGE);
            assert!(suffix(&session.customer, CUSTOMER_ID_PREFIX) < SYNTHETIC_ID_RANGE);
            assert!(suffix(&session.subscription, SUBSCRIPTION_ID_PREFIX) < SYNTHETIC_ID_RANGE);
            assert!(suffix(&session.payment_intent, PAYMENT_INTENT_ID_PREFIX) < SYNTHETIC_ID_RANGE);
        }
    }

    #[test]
    fn fixed_fields_never_vary() {
        let payload = EventPayload::checkout_session_completed();
        assert_eq!(payload.event_type, CHECKOUT_SESSION_COMPLETED);
        assert_eq!(payload.data.object.metadata.service_id, "1");
        assert_eq!(payload.data.object.metadata.user_id, "1");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut rng = fastrand::Rng::with_seed(1);
        let payload = EventPayload::checkout_session_completed_with(&mut rng);
        let value: serde_json::Value =
            serde_json::from_slice(&payload.to_json_bytes().unwrap()).unwrap();

        assert_eq!(value["type"], "checkout.session.completed");
        assert!(value.get("event_type").is_none());
        assert_eq!(value["data"]["object"]["id"], payload.data.object.id.as_str());
        assert_eq!(value["data"]["object"]["metadata"]["service_id"], "1");
        assert_eq!(value["data"]["object"]["metadata"]["user_id"], "1");
    }

    #[test]
    fn same_seed_gives_same_identifiers() {
        let a = EventPayload::checkout_session_completed_with(&mut fastrand::Rng::with_seed(42));
        let b = EventPayload::checkout_session_completed_with(&mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn pretty_json_is_indented() {
        let payload = EventPayload::checkout_session_completed();
        let pretty = payload.to_pretty_json().unwrap();
        assert!(pretty.contains("\n  \"type\": \"checkout.session.completed\""));
    }
}
