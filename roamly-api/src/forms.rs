use axum::{extract::State, Json};
use serde_json::{json, Value};

use roamly_core::submission::{AdInquiry, ContactMessage, Subscriber};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/newsletter
pub async fn subscribe(
    State(state): State<AppState>,
    Json(subscriber): Json<Subscriber>,
) -> Result<Json<Value>, ApiError> {
    subscriber.validate()?;
    state.content.create_subscriber(&subscriber).await?;
    Ok(Json(json!({ "success": true, "message": "Subscribed!" })))
}

/// POST /api/contact
pub async fn contact(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<Value>, ApiError> {
    message.validate()?;
    state.content.create_contact(&message).await?;
    Ok(Json(json!({ "success": true, "message": "Message sent!" })))
}

/// POST /api/advertise
pub async fn advertise(
    State(state): State<AppState>,
    Json(inquiry): Json<AdInquiry>,
) -> Result<Json<Value>, ApiError> {
    inquiry.validate()?;
    state.content.create_inquiry(&inquiry).await?;
    Ok(Json(json!({ "success": true, "message": "Inquiry received!" })))
}
