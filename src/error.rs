//! Error types for the Koa Radix Trie.
//!
//! The trie itself cannot fail: a missing word is a boolean or empty result,
//! never an error. The only user-facing failure is an unrecognized render
//! mode selector.

/// Errors that can occur in Koa Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KoaTrieError {
    /// Error when a render mode selector is not recognized.
    #[error("unknown render mode: '{0}'")]
    UnknownRenderMode(String),
}

// Display implementation is automatically provided by thiserror

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KoaTrieError::UnknownRenderMode("yaml".to_string());
        assert_eq!(err.to_string(), "unknown render mode: 'yaml'");
    }
}
