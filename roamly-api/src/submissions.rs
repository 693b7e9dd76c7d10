use axum::{extract::State, Json};
use serde_json::{json, Value};

use roamly_core::submission::{SubmissionRecord, SubmissionRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/submit-tool
///
/// The payment gate. A submission record is created only after the order
/// verifies; a rejected order is the caller's problem (400, verbatim
/// reason), a broken upstream or deployment is ours (502/500).
pub async fn submit_tool(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<Value>, ApiError> {
    request.validate()?;

    let verification = state.verifier.verify(&request.order_id).await?;
    if !verification.valid {
        let reason = verification
            .reason
            .unwrap_or_else(|| "payment could not be verified".to_string());
        return Err(ApiError::BadRequest(reason));
    }

    let capture_id = verification
        .capture_id
        .ok_or_else(|| anyhow::anyhow!("valid verification carried no capture id"))?;
    let record = SubmissionRecord::new(
        request,
        capture_id,
        verification.payer_email,
        state.listing.fee.clone(),
    );
    state.content.create_submission(&record).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Tool submitted for review!",
        "reference": record.reference,
    })))
}
