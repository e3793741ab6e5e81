use crate::callback::CallbackParams;
use crate::client::OAuth2Client;
use crate::error::Error;
use crate::flow::TokenExchanger;
use crate::http::HttpClient;
use crate::tokens::OAuth2Tokens;

/// Configuration for creating a [`GitLab`] client with a custom HTTP client.
///
/// Use this when you need to provide your own [`HttpClient`] implementation
/// (e.g. a pre-configured `reqwest::Client` with custom timeouts or proxies).
/// For the common case, use [`GitLab::new`] which uses the built-in default client.
pub struct GitLabOptions<'a, H: HttpClient> {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub http_client: &'a H,
}

/// OAuth 2.0 client for [GitLab](https://docs.gitlab.com/ee/api/oauth2.html).
///
/// Covers both GitLab.com and self-hosted instances via the base URL.
/// Supports token exchange, refresh, and revocation, and implements
/// [`TokenExchanger`] so it slots directly into
/// [`AuthCodeFlow`](crate::AuthCodeFlow) for callback handling with denial
/// interception.
///
/// # Setup
///
/// 1. In your GitLab instance, go to **User Settings > Applications** (or
///    **Group Settings > Applications**).
/// 2. Create an application and note the **Application ID** (client ID) and
///    **Secret** (client secret).
/// 3. Set the **Redirect URI** to match the `redirect_uri` you pass to
///    [`GitLab::new`].
///
/// # Example
///
/// ```rust
/// use gitlab_oauth_flow::{AuthCodeFlow, CallbackParams, GitLab, generate_state};
///
/// # async fn example() -> Result<(), gitlab_oauth_flow::Error> {
/// let gitlab = GitLab::new(
///     "https://gitlab.com",
///     "your-client-id",
///     Some("your-client-secret".into()),
///     "https://example.com/callback",
/// );
///
/// // Step 1: Generate CSRF state and redirect the user.
/// let state = generate_state();
/// let url = gitlab.authorization_url(&state, &["read_user", "openid"]);
/// // Store `state` in the user's session, then redirect to `url`.
///
/// // Step 2: In your callback handler, hand the query parameters to the flow.
/// let flow = AuthCodeFlow::new(gitlab);
/// let params = CallbackParams::from_query("code=authorization-code&state=xyz");
/// let tokens = flow.get_access_token(&params, None).await?;
/// println!("Access token: {}", tokens.access_token()?);
///
/// // Step 3 (optional): Refresh an expired access token.
/// let refreshed = flow
///     .exchanger()
///     .refresh_access_token(tokens.refresh_token()?)
///     .await?;
///
/// // Step 4 (optional): Revoke a token.
/// flow.exchanger().revoke_token(refreshed.access_token()?).await?;
/// # Ok(())
/// # }
/// ```
pub struct GitLab<'a, H: HttpClient> {
    client: OAuth2Client,
    http_client: &'a H,
    authorization_endpoint: String,
    token_endpoint: String,
    revocation_endpoint: String,
}

impl<'a, H: HttpClient> GitLab<'a, H> {
    /// Creates a GitLab client from a [`GitLabOptions`] struct.
    ///
    /// Use this when you need a custom HTTP client. For the common case,
    /// use [`GitLab::new`] instead.
    pub fn from_options(options: GitLabOptions<'a, H>) -> Self {
        let base = options.base_url;
        Self {
            http_client: options.http_client,
            client: OAuth2Client::new(
                options.client_id,
                options.client_secret,
                Some(options.redirect_uri),
            ),
            authorization_endpoint: format!("{base}/oauth/authorize"),
            token_endpoint: format!("{base}/oauth/token"),
            revocation_endpoint: format!("{base}/oauth/revoke"),
        }
    }
}

#[cfg(feature = "reqwest-client")]
impl GitLab<'static, reqwest::Client> {
    /// Creates a new GitLab OAuth 2.0 client for a specific GitLab instance.
    ///
    /// Uses the built-in `reqwest::Client` for HTTP requests. To provide a
    /// custom HTTP client, use [`GitLab::from_options`] instead.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the GitLab instance (e.g.
    ///   `"https://gitlab.com"` or `"https://gitlab.example.com"` for
    ///   self-hosted).
    /// * `client_id` - The OAuth 2.0 application ID from GitLab.
    /// * `client_secret` - Optional client secret. Use `None` for public clients.
    /// * `redirect_uri` - The URI GitLab will redirect to after authorization.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: Option<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self::from_options(GitLabOptions {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret,
            redirect_uri: redirect_uri.into(),
            http_client: crate::http::default_client(),
        })
    }
}

impl<'a, H: HttpClient> GitLab<'a, H> {
    /// Returns the provider name (`"GitLab"`).
    pub fn name(&self) -> &'static str {
        "GitLab"
    }

    /// Builds the GitLab authorization URL that the user should be
    /// redirected to.
    ///
    /// The returned URL carries all required OAuth 2.0 parameters. Store
    /// `state` in the user's session before redirecting; create one with
    /// [`generate_state`](crate::generate_state).
    pub fn authorization_url(&self, state: &str, scopes: &[&str]) -> url::Url {
        self.client
            .create_authorization_url(&self.authorization_endpoint, state, scopes)
    }

    /// Exchanges an authorization code for access and refresh tokens.
    ///
    /// `redirect_uri`, when given, overrides the configured one for this
    /// exchange. Most callers go through
    /// [`AuthCodeFlow::get_access_token`](crate::AuthCodeFlow::get_access_token)
    /// instead, which adds denial interception in front of this call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OAuthRequest`] if GitLab rejects the code, or
    /// [`Error::Http`] on network failure.
    pub async fn validate_authorization_code(
        &self,
        code: &str,
        redirect_uri: Option<&str>,
    ) -> Result<OAuth2Tokens, Error> {
        self.client
            .validate_authorization_code(
                self.http_client,
                &self.token_endpoint,
                code,
                redirect_uri,
            )
            .await
    }

    /// Refreshes an expired access token using a refresh token.
    ///
    /// GitLab access tokens expire after a configurable period (typically
    /// 2 hours); the initial token response includes a refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OAuthRequest`] if the refresh token is invalid or
    /// revoked, or [`Error::Http`] on network failure.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<OAuth2Tokens, Error> {
        self.client
            .refresh_access_token(self.http_client, &self.token_endpoint, refresh_token, &[])
            .await
    }

    /// Revokes an access token or refresh token (RFC 7009).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedResponse`] if GitLab returns a non-200
    /// status, or [`Error::Http`] on network failure.
    pub async fn revoke_token(&self, token: &str) -> Result<(), Error> {
        self.client
            .revoke_token(self.http_client, &self.revocation_endpoint, token)
            .await
    }
}

impl<'a, H: HttpClient> TokenExchanger for GitLab<'a, H> {
    /// Extracts the `code` parameter and exchanges it at the token
    /// endpoint. Missing `code` fails before any network call.
    async fn exchange(
        &self,
        params: &CallbackParams,
        redirect_uri: Option<&str>,
    ) -> Result<OAuth2Tokens, Error> {
        let code = params.code().ok_or(Error::MissingField { field: "code" })?;
        self.validate_authorization_code(code, redirect_uri).await
    }
}
