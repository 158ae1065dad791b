//! Optional remote scoring for Assumption Sniper
//!
//! Best-effort call to the analysis endpoint; any failure maps to a
//! [`ScoringError`] that the session turns into the local fallback.
use gloo_net::http::Request;
use mvpm_game::scoring::RemoteAnalysis;
use mvpm_game::scoring::assumptions::SLOT_COUNT;
use mvpm_game::ScoringError;
use serde_json::json;

const ANALYZE_ENDPOINT: &str = "/api/analyze-assumptions";

/// Ask the analysis endpoint to grade the three assumptions.
///
/// # Errors
///
/// Returns an error for transport failures, non-success statuses, and
/// unparseable bodies; callers feed the result into
/// `GameSession::resolve_remote`, which falls back locally.
pub async fn analyze_assumptions(
    assumptions: &[String; SLOT_COUNT],
) -> Result<RemoteAnalysis, ScoringError> {
    let request = Request::post(ANALYZE_ENDPOINT)
        .json(&json!({ "assumptions": assumptions }))
        .map_err(|err| ScoringError::RemoteUnavailable(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ScoringError::RemoteUnavailable(err.to_string()))?;
    if !response.ok() {
        return Err(ScoringError::RemoteUnavailable(format!(
            "status {}",
            response.status()
        )));
    }
    response
        .json::<RemoteAnalysis>()
        .await
        .map_err(|err| ScoringError::BadResponse(err.to_string()))
}
