use crate::error::AppError;
use crate::server::extract::RequestBody;
use crate::server::respond::ApiJson;
use crate::server::router::AppState;
use axum::extract::State;
use contact_schema::{ContactSubmission, validate_contact_submission};
use tracing::{debug, error};

/// POST /api/contact
///
/// - body fails the schema: 400 `{"error": "<validation message>"}`
/// - stored: 200 with the stored record
/// - storage fails: logged, 500 `{"error": "Failed to submit contact form"}`
pub(super) async fn submit_contact(
    State(state): State<AppState>,
    body: RequestBody,
) -> Result<ApiJson<ContactSubmission>, AppError> {
    let input = validate_contact_submission(&body.value)?;

    let stored = state
        .storage
        .create_contact_submission(input)
        .await
        .inspect_err(|e| error!(error = %e, "Error creating contact submission"))?;

    debug!(id = %stored.id, "contact submission stored");
    Ok(ApiJson(stored))
}
