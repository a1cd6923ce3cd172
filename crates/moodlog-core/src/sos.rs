//! SOS alert dispatch -- best-effort webhook notification to the
//! configured emergency contacts endpoint.
//!
//! Delivery is a courtesy layered atop local journaling: transport
//! failures and non-2xx responses are converted into a [`DispatchOutcome`]
//! instead of propagating, and there are no retries. A save must never be
//! blocked or crashed by a failed alert.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Maximum number of contacts an alert is sent to.
pub const MAX_CONTACTS: usize = 3;

/// Fixed message body sent with every alert.
pub const SOS_MESSAGE: &str =
    "SOS: We detected 5 consecutive difficult days. Please check in.";

/// Request timeout for the single dispatch attempt.
const DISPATCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Parse a raw comma-separated contacts string into the contact list.
///
/// Tokens are trimmed, empty tokens dropped, and the list truncated to the
/// first [`MAX_CONTACTS`] survivors in original order.
pub fn parse_contacts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .take(MAX_CONTACTS)
        .collect()
}

/// Wire body POSTed to the notification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SosPayload {
    /// Up to three trimmed contact strings.
    pub contacts: Vec<String>,
    /// Fixed alert message.
    pub message: String,
}

/// Why a dispatch attempt performed no network action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No contacts survived parsing.
    NoContacts,
    /// No endpoint configured.
    NoEndpoint,
}

/// Result of a dispatch attempt.
///
/// `Skipped` is the expected outcome when nothing is configured, not an
/// error. `Failed` captures a swallowed transport or HTTP failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum DispatchOutcome {
    /// Endpoint answered 2xx.
    Sent,
    /// No network call was attempted.
    Skipped { reason: SkipReason },
    /// Network call attempted and failed; not retried.
    Failed { reason: String },
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent)
    }
}

/// Best-effort SOS alert sender.
pub struct SosDispatcher {
    client: Client,
    endpoint: Option<String>,
}

impl SosDispatcher {
    /// Create a dispatcher for the given endpoint. `None` or an empty
    /// string means dispatch is always skipped.
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint.filter(|e| !e.trim().is_empty());
        let client = Client::builder()
            .timeout(DISPATCH_TIMEOUT)
            .build()
            // Builder only fails on TLS backend misconfiguration.
            .unwrap_or_default();
        Self { client, endpoint }
    }

    /// Whether an endpoint is configured.
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Parse `raw_contacts` and, if both contacts and an endpoint are
    /// configured, issue exactly one POST with the fixed payload shape.
    ///
    /// Never returns an `Err`: skipping is a normal outcome and transport
    /// failures are swallowed into [`DispatchOutcome::Failed`].
    pub async fn trigger_if_configured(&self, raw_contacts: &str) -> DispatchOutcome {
        let contacts = parse_contacts(raw_contacts);
        if contacts.is_empty() {
            return DispatchOutcome::Skipped {
                reason: SkipReason::NoContacts,
            };
        }
        let Some(endpoint) = self.endpoint.as_deref() else {
            return DispatchOutcome::Skipped {
                reason: SkipReason::NoEndpoint,
            };
        };

        let payload = SosPayload {
            contacts,
            message: SOS_MESSAGE.to_string(),
        };

        match self.client.post(endpoint).json(&payload).send().await {
            Ok(resp) if resp.status().is_success() => DispatchOutcome::Sent,
            Ok(resp) => DispatchOutcome::Failed {
                reason: format!("endpoint returned HTTP {}", resp.status()),
            },
            Err(err) => DispatchOutcome::Failed {
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_contacts_trims_drops_and_truncates() {
        assert_eq!(parse_contacts("  a, b ,, c ,d"), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_contacts_empty_string_is_empty() {
        assert!(parse_contacts("").is_empty());
        assert!(parse_contacts(" , ,, ").is_empty());
    }

    #[test]
    fn parse_contacts_preserves_order() {
        assert_eq!(
            parse_contacts("+911234567890, +919876543210"),
            vec!["+911234567890", "+919876543210"]
        );
    }

    #[test]
    fn payload_wire_shape() {
        let payload = SosPayload {
            contacts: vec!["+911234567890".into(), "+919876543210".into()],
            message: SOS_MESSAGE.into(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["contacts"][0], "+911234567890");
        assert_eq!(
            json["message"],
            "SOS: We detected 5 consecutive difficult days. Please check in."
        );
    }

    #[tokio::test]
    async fn no_contacts_is_skipped() {
        let dispatcher = SosDispatcher::new(Some("https://x".into()));
        let outcome = dispatcher.trigger_if_configured("").await;
        assert_eq!(
            outcome,
            DispatchOutcome::Skipped {
                reason: SkipReason::NoContacts
            }
        );
    }

    #[tokio::test]
    async fn no_endpoint_is_skipped() {
        let dispatcher = SosDispatcher::new(None);
        let outcome = dispatcher.trigger_if_configured("+1,+2").await;
        assert_eq!(
            outcome,
            DispatchOutcome::Skipped {
                reason: SkipReason::NoEndpoint
            }
        );
    }

    #[tokio::test]
    async fn blank_endpoint_counts_as_unconfigured() {
        let dispatcher = SosDispatcher::new(Some("   ".into()));
        assert!(!dispatcher.is_configured());
        let outcome = dispatcher.trigger_if_configured("+1").await;
        assert_eq!(
            outcome,
            DispatchOutcome::Skipped {
                reason: SkipReason::NoEndpoint
            }
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_without_erroring() {
        // Port 1 on loopback; connection refused.
        let dispatcher = SosDispatcher::new(Some("http://127.0.0.1:1/sos".into()));
        let outcome = dispatcher.trigger_if_configured("+1").await;
        assert!(matches!(outcome, DispatchOutcome::Failed { .. }));
    }
}
