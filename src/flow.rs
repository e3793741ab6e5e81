use std::future::Future;

use crate::callback::CallbackParams;
use crate::error::Error;
use crate::tokens::OAuth2Tokens;

/// The authorization-code-for-token exchange capability.
///
/// Implementations extract the `code` parameter and perform the exchange
/// against the provider's token endpoint. A per-call `redirect_uri`, when
/// given, must be sent instead of any configured one.
pub trait TokenExchanger: Send + Sync {
    fn exchange(
        &self,
        params: &CallbackParams,
        redirect_uri: Option<&str>,
    ) -> impl Future<Output = Result<OAuth2Tokens, Error>> + Send;
}

/// The authorization-code flow as seen from the callback side.
///
/// Wraps a [`TokenExchanger`] and inspects the redirect parameters before
/// the exchange runs: when GitLab reports an error (the usual case being
/// the user declining consent), the flow fails with
/// [`Error::AccessDenied`] without touching the network. Otherwise the
/// parameters pass through to the exchanger untouched and its result is
/// returned verbatim.
///
/// # Example
///
/// ```rust
/// use gitlab_oauth_flow::{AuthCodeFlow, CallbackParams, GitLab};
///
/// # async fn example() -> Result<(), gitlab_oauth_flow::Error> {
/// let gitlab = GitLab::new(
///     "https://gitlab.com",
///     "your-client-id",
///     Some("your-client-secret".into()),
///     "https://example.com/callback",
/// );
/// let flow = AuthCodeFlow::new(gitlab);
///
/// // In the redirect handler:
/// let params = CallbackParams::from_query("code=the-auth-code&state=xyz");
/// match flow.get_access_token(&params, None).await {
///     Ok(tokens) => println!("Access token: {}", tokens.access_token()?),
///     Err(e) if e.is_access_denied() => println!("You declined access."),
///     Err(_) => println!("Login failed, try again."),
/// }
/// # Ok(())
/// # }
/// ```
pub struct AuthCodeFlow<E: TokenExchanger> {
    exchanger: E,
}

impl<E: TokenExchanger> AuthCodeFlow<E> {
    pub fn new(exchanger: E) -> Self {
        Self { exchanger }
    }

    /// Exchange the callback parameters for tokens, unless the provider
    /// signalled a denial.
    ///
    /// Any value of the `error` key counts as a denial; the value is not
    /// checked against the RFC 6749 error-code set, it is carried verbatim
    /// in [`Error::AccessDenied`]. Stateless: the same parameters always
    /// produce the same outcome.
    ///
    /// # Errors
    ///
    /// [`Error::AccessDenied`] when the callback carries an `error`
    /// parameter; otherwise whatever the wrapped exchanger reports,
    /// unchanged.
    pub async fn get_access_token(
        &self,
        params: &CallbackParams,
        redirect_uri: Option<&str>,
    ) -> Result<OAuth2Tokens, Error> {
        if let Some(code) = params.error() {
            log::debug!("callback carries error={code}, skipping token exchange");
            return Err(Error::AccessDenied { code: code.into() });
        }

        log::debug!("callback accepted, delegating to token exchange");
        self.exchanger.exchange(params, redirect_uri).await
    }

    /// The wrapped exchanger, for callers that need provider operations
    /// beyond the callback exchange (refresh, revocation).
    pub fn exchanger(&self) -> &E {
        &self.exchanger
    }
}
