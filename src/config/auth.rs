//! Authentication header building for search requests.

use super::credentials::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Bearer` header for a resolved token.
///
/// Returns `None` when no token was resolved; the API then answers 401.
pub fn build_auth_header(token: Option<&SecureString>) -> Option<AuthHeader> {
    token.map(|token| {
        (
            "Authorization".to_string(),
            format!("Bearer {}", token.expose()),
        )
    })
}
