#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The provider redirected back with an `error` parameter instead of an
    /// authorization code. The user most likely declined consent on the
    /// GitLab authorization screen. Never retried: this is a terminal user
    /// decision, not a transient fault.
    #[error("authorization denied by user: {code}")]
    AccessDenied { code: String },

    /// OAuth2 error response from the token endpoint (HTTP 400/401 with
    /// standard error JSON body). Per RFC 6749 Section 5.2.
    #[error("OAuth2 error: {code}")]
    OAuthRequest {
        code: String,
        description: Option<String>,
        uri: Option<String>,
        state: Option<String>,
    },

    /// Token endpoint returned a non-200/400/401 status.
    #[error("Unexpected HTTP status: {status}")]
    UnexpectedResponse { status: u16 },

    /// Token endpoint returned 400/401 but the body is not valid
    /// OAuth2 error JSON.
    #[error("Unparseable error response (HTTP {status})")]
    UnexpectedErrorBody { status: u16, body: String },

    /// Network / transport error from the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// A required field is missing from the callback parameters or the
    /// token response JSON.
    #[error("Missing or invalid field: {field}")]
    MissingField { field: &'static str },
}

impl Error {
    /// Whether this error is the denial tier (user declined consent), as
    /// opposed to an exchange failure. Callers typically branch on this to
    /// show "you declined access" rather than "login failed, try again".
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::AccessDenied { .. })
    }
}
