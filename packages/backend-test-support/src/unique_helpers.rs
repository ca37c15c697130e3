//! Unique test data backed by ULIDs, so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("training");
/// assert_ne!(a, unique_str("training"));
/// assert!(a.starts_with("training-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `{prefix}-{ulid}@example.test`, lowercase so it passes address validation unchanged.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("coach");
/// assert!(email.ends_with("@example.test"));
/// assert!(email.starts_with("coach-"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!(
        "{}-{}@example.test",
        prefix,
        Ulid::new().to_string().to_lowercase()
    )
}
