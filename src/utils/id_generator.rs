//! Record identifier generation.

use crate::error::AppError;
use base64::Engine as _;

/// Random bytes per identifier; 6 bytes encode to 8 base64 characters.
const ID_LENGTH_BYTES: usize = 6;

/// Generates a random identifier such as `u_Xk3b9QaZ`.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, so identifiers are safe in query strings.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_id(prefix: &str) -> Result<String, AppError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        tracing::error!(error = %e, "system RNG failure");
        AppError::internal("failed to generate identifier")
    })?;

    Ok(format!(
        "{prefix}_{}",
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
    ))
}
