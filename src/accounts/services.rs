/// Lowercase and trim an email. The normalized form is the uniqueness and
/// lookup key, so it is applied before every store call.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
