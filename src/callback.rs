use std::collections::HashMap;

/// Query parameters delivered by the provider's redirect back to the
/// application, verbatim.
///
/// Built once per callback, either from already-parsed key/value pairs
/// (most web frameworks hand these out) or from the raw query string.
/// Unknown keys are kept as-is and never validated.
///
/// # Example
///
/// ```rust
/// use gitlab_oauth_flow::CallbackParams;
///
/// let params = CallbackParams::from_query("code=abc123&state=xyz");
/// assert_eq!(params.code(), Some("abc123"));
/// assert_eq!(params.state(), Some("xyz"));
/// assert_eq!(params.error(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallbackParams {
    values: HashMap<String, String>,
}

impl CallbackParams {
    /// Parse a raw query string (without the leading `?`) using standard
    /// `application/x-www-form-urlencoded` semantics. On duplicate keys the
    /// last value wins, matching common query-string parsing.
    pub fn from_query(query: &str) -> Self {
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// The provider-supplied error code, when the provider signalled a
    /// failure instead of issuing a code (e.g. `access_denied`).
    pub fn error(&self) -> Option<&str> {
        self.get("error")
    }

    /// Human-readable error description, when the provider sent one
    /// alongside `error`.
    pub fn error_description(&self) -> Option<&str> {
        self.get("error_description")
    }

    /// The authorization code to exchange at the token endpoint.
    pub fn code(&self) -> Option<&str> {
        self.get("code")
    }

    /// The anti-forgery state token echoed back by the provider. Comparing
    /// it against the value stored at redirect time is the caller's job.
    pub fn state(&self) -> Option<&str> {
        self.get("state")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CallbackParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
