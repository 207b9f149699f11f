//! Helpers for generating unique test data, keeping concurrent test runs
//! from colliding on emails or contact ids.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email address in the format
/// `{prefix}-{ulid}@example.test`.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}

#[cfg(test)]
mod tests {
    use super::{unique_email, unique_str};

    #[test]
    fn test_unique_str_does_not_repeat() {
        let a = unique_str("contact");
        let b = unique_str("contact");
        assert_ne!(a, b);
        assert!(a.starts_with("contact-"));
    }

    #[test]
    fn test_unique_email_shape() {
        let email = unique_email("user");
        assert!(email.starts_with("user-"));
        assert!(email.ends_with("@example.test"));
    }
}
