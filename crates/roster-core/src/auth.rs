use subtle::ConstantTimeEq;

/// Tokens accepted when no allow-list is configured.
pub const DEFAULT_TOKENS: &[&str] = &["valid-token", "another-valid-token"];

/// Shared-secret gate: accepts any bearer token on a fixed allow-list.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    tokens: Vec<String>,
}

impl Default for TokenAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKENS.iter().copied())
    }
}

impl TokenAuthenticator {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Check an `Authorization` header value.
    ///
    /// The token is whatever follows the last space, so `"Bearer xyz"` and a
    /// bare `"xyz"` are treated alike.
    pub fn authenticate(&self, header_value: Option<&str>) -> bool {
        let Some(header) = header_value.filter(|h| !h.is_empty()) else {
            return false;
        };
        let token = extract_token(header);
        self.is_allowed(token)
    }

    fn is_allowed(&self, token: &str) -> bool {
        // Compare against every entry so timing does not reveal which one matched.
        self.tokens.iter().fold(false, |found, allowed| {
            found | bool::from(allowed.as_bytes().ct_eq(token.as_bytes()))
        })
    }
}

fn extract_token(header: &str) -> &str {
    header.rsplit(' ').next().unwrap_or(header)
}
