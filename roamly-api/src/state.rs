use std::sync::Arc;

use roamly_core::{ContentStore, OrderVerifier};

use crate::app_config::ListingRules;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub verifier: Arc<dyn OrderVerifier>,
    pub listing: ListingRules,
}
