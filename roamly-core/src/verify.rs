use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::CoreResult;

/// Outcome of checking a payment order against the listing fee.
///
/// `valid: false` is a normal business-rule rejection carrying a
/// human-readable reason; infrastructure problems (credentials, network,
/// upstream auth) are surfaced as `CoreError` instead and never as a reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
}

impl VerificationResult {
    pub fn approved(capture_id: String, payer_email: Option<String>) -> Self {
        Self {
            valid: true,
            reason: None,
            capture_id: Some(capture_id),
            payer_email,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
            capture_id: None,
            payer_email: None,
        }
    }
}

#[async_trait]
pub trait OrderVerifier: Send + Sync {
    /// Check an untrusted, caller-supplied order id against the payment
    /// backend. Errors are configuration or upstream failures; rejections
    /// come back as `Ok` with `valid: false`.
    async fn verify(&self, order_id: &str) -> CoreResult<VerificationResult>;
}
