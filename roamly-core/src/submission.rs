use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

/// Status label a freshly created listing request carries until an editor
/// reviews it.
pub const INITIAL_SUBMISSION_STATUS: &str = "Pending Review";

/// Form payload for a paid listing request. `order_id` references a payment
/// order that must verify before anything is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub tool_name: String,
    pub tool_url: String,
    pub contact_email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub order_id: String,
}

impl SubmissionRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.tool_name.trim().is_empty()
            || self.tool_url.trim().is_empty()
            || self.contact_email.trim().is_empty()
        {
            return Err(CoreError::Validation("Required fields missing".to_string()));
        }
        if self.order_id.trim().is_empty() {
            return Err(CoreError::Validation("Order id required".to_string()));
        }
        Ok(())
    }
}

/// A listing request that cleared payment verification. There is no
/// idempotency guard here: verifying the same order twice and creating twice
/// yields two records. Known gap; the intended dedupe key (order id vs
/// capture id) is still undecided, so nothing dedupes yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub reference: Uuid,
    pub tool_name: String,
    pub tool_url: String,
    pub contact_email: String,
    pub description: String,
    pub category: String,
    pub order_id: String,
    pub capture_id: String,
    pub payer_email: Option<String>,
    pub fee: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn new(request: SubmissionRequest, capture_id: String, payer_email: Option<String>, fee: String) -> Self {
        Self {
            reference: Uuid::new_v4(),
            tool_name: request.tool_name,
            tool_url: request.tool_url,
            contact_email: request.contact_email,
            description: request.description,
            category: request.category,
            order_id: request.order_id,
            capture_id,
            payer_email,
            fee,
            status: INITIAL_SUBMISSION_STATUS.to_string(),
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
}

impl Subscriber {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.email.contains('@') {
            return Err(CoreError::Validation("Valid email required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err(CoreError::Validation("All fields required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdInquiry {
    pub company_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub message: String,
}

impl AdInquiry {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.company_name.trim().is_empty() || self.contact_email.trim().is_empty() {
            return Err(CoreError::Validation("Required fields missing".to_string()));
        }
        Ok(())
    }
}
