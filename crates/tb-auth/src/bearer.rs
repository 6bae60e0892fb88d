use crate::error::AuthError;

const SCHEME: &str = "bearer";

/// Extract the token from an `Authorization` value.
///
/// Accepts either `Bearer <token>` (scheme matched case-insensitively) or a
/// bare token, as passed with `--token`.
///
/// # Errors
///
/// `AuthError::NotAuthenticated` for an empty value,
/// `AuthError::MalformedHeader` for any other scheme or a missing token.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuthError::NotAuthenticated);
    }

    let Some((scheme, rest)) = value.split_once(char::is_whitespace) else {
        return Ok(value);
    };
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(AuthError::MalformedHeader(format!(
            "unsupported scheme '{scheme}'"
        )));
    }

    let token = rest.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MalformedHeader("expected 'Bearer <token>'".into()));
    }
    Ok(token)
}
