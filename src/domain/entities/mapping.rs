//! Mapping entity representing a shortened URL binding.

/// A persisted association between a short token and its original URL.
///
/// Both sides are unique across all mappings: a token points at exactly
/// one URL and a URL is shortened to at most one token. Mappings are
/// created once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub token: String,
    pub original_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(token: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            original_url: original_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = Mapping::new("abcDEF_123", "https://example.com");

        assert_eq!(mapping.token, "abcDEF_123");
        assert_eq!(mapping.original_url, "https://example.com");
    }

    #[test]
    fn test_mapping_equality() {
        let a = Mapping::new("abcDEF_123", "https://example.com");
        let b = Mapping::new("abcDEF_123".to_string(), "https://example.com".to_string());

        assert_eq!(a, b);
        assert_ne!(a, Mapping::new("zzzzzzzzzz", "https://example.com"));
    }
}
