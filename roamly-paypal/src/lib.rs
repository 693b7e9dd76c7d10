//! PayPal order verification.
//!
//! The one correctness contract in the system: a listing submission must not
//! be credited unless an exact, currency- and amount-matched, completed
//! capture exists on the referenced order. Every call re-authenticates via
//! the client-credentials grant; nothing is cached and nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use roamly_core::verify::{OrderVerifier, VerificationResult};
use roamly_core::{CoreError, CoreResult};

pub const EXPECTED_CURRENCY: &str = "USD";
pub const LISTING_FEE: &str = "49.00";

const SANDBOX_BASE: &str = "https://api-m.sandbox.paypal.com";
const LIVE_BASE: &str = "https://api-m.paypal.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sandbox,
    Live,
}

impl Mode {
    pub fn base_url(&self) -> &'static str {
        match self {
            Mode::Sandbox => SANDBOX_BASE,
            Mode::Live => LIVE_BASE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayPalConfig {
    pub client_id: String,
    pub client_secret: String,
    pub mode: Mode,
}

impl PayPalConfig {
    /// Credential check performed before any network call so a broken
    /// deployment surfaces as a configuration error, not a bad order.
    fn ensure_credentials(&self) -> CoreResult<()> {
        if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
            return Err(CoreError::Config(
                "payment credentials are not configured".to_string(),
            ));
        }
        Ok(())
    }
}

/// What a capture must match, exactly. The amount comparison is textual:
/// "49.0" is not "49.00".
#[derive(Debug, Clone)]
pub struct ExpectedPayment {
    pub currency: String,
    pub amount: String,
}

impl Default for ExpectedPayment {
    fn default() -> Self {
        Self {
            currency: EXPECTED_CURRENCY.to_string(),
            amount: LISTING_FEE.to_string(),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct TokenPayload {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderResource {
    pub status: String,
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
    pub payer: Option<Payer>,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseUnit {
    pub payments: Option<Payments>,
}

#[derive(Debug, Deserialize)]
pub struct Payments {
    #[serde(default)]
    pub captures: Vec<Capture>,
}

#[derive(Debug, Deserialize)]
pub struct Capture {
    pub id: String,
    pub amount: CaptureAmount,
}

#[derive(Debug, Deserialize)]
pub struct CaptureAmount {
    pub value: String,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
pub struct Payer {
    pub email_address: Option<String>,
}

// ============================================================================
// Acceptance predicates
// ============================================================================

/// Apply the acceptance predicates in their fixed order. The first failing
/// predicate determines the reported reason; nothing past it is examined.
/// Only `purchase_units[0].payments.captures[0]` is ever resolved — orders
/// with any other shape are rejected, never indexed blindly.
pub fn evaluate(order: &OrderResource, expected: &ExpectedPayment) -> VerificationResult {
    if order.status != "COMPLETED" {
        return VerificationResult::rejected(format!(
            "Order not completed (status: {})",
            order.status
        ));
    }

    let capture = order
        .purchase_units
        .first()
        .and_then(|unit| unit.payments.as_ref())
        .and_then(|payments| payments.captures.first());
    let Some(capture) = capture else {
        return VerificationResult::rejected("no payment capture found");
    };

    if capture.amount.currency_code != expected.currency {
        return VerificationResult::rejected(format!(
            "Unexpected currency: {}",
            capture.amount.currency_code
        ));
    }

    if capture.amount.value != expected.amount {
        return VerificationResult::rejected(format!(
            "Unexpected amount: {}",
            capture.amount.value
        ));
    }

    let payer_email = order
        .payer
        .as_ref()
        .and_then(|payer| payer.email_address.clone());
    VerificationResult::approved(capture.id.clone(), payer_email)
}

// ============================================================================
// Client
// ============================================================================

pub struct PayPalVerifier {
    http: reqwest::Client,
    config: PayPalConfig,
    base_url: String,
    expected: ExpectedPayment,
}

impl PayPalVerifier {
    pub fn new(config: PayPalConfig, expected: ExpectedPayment) -> CoreResult<Self> {
        let base_url = config.mode.base_url().to_string();
        Self::with_base_url(config, expected, base_url)
    }

    /// Point the verifier at an explicit base URL. Tests use this to stand
    /// in a loopback server for the payment backend.
    pub fn with_base_url(
        config: PayPalConfig,
        expected: ExpectedPayment,
        base_url: impl Into<String>,
    ) -> CoreResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CoreError::Config(format!("http client init failed: {e}")))?;

        Ok(Self {
            http,
            config,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            expected,
        })
    }

    /// Client-credentials exchange. The resulting token lives for this one
    /// verification only. Failure messages never echo the credentials.
    async fn access_token(&self) -> CoreResult<String> {
        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CoreError::UpstreamAuth(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::UpstreamAuth(format!(
                "token endpoint returned {status}"
            )));
        }

        let payload: TokenPayload = response
            .json()
            .await
            .map_err(|e| CoreError::UpstreamAuth(format!("token response unreadable: {e}")))?;

        payload
            .access_token
            .ok_or_else(|| CoreError::UpstreamAuth("token response missing access_token".to_string()))
    }

    async fn fetch_order(&self, token: &str, order_id: &str) -> CoreResult<OrderResource> {
        let response = self
            .http
            .get(format!("{}/v2/checkout/orders/{order_id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| CoreError::UpstreamFetch(format!("order request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::UpstreamFetch(format!(
                "order endpoint returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CoreError::UpstreamFetch(format!("order response unreadable: {e}")))
    }
}

#[async_trait]
impl OrderVerifier for PayPalVerifier {
    async fn verify(&self, order_id: &str) -> CoreResult<VerificationResult> {
        self.config.ensure_credentials()?;

        let token = self.access_token().await?;
        let order = self.fetch_order(&token, order_id).await?;

        let result = evaluate(&order, &self.expected);
        if result.valid {
            tracing::info!(order_id, capture_id = ?result.capture_id, "order verified");
        } else {
            tracing::warn!(order_id, reason = ?result.reason, "order rejected");
        }
        Ok(result)
    }
}
