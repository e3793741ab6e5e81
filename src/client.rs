use url::Url;

use crate::error::Error;
use crate::http::HttpClient;
use crate::request::{create_oauth2_request, encode_basic_credentials, send_token_request};
use crate::tokens::OAuth2Tokens;

pub struct OAuth2Client {
    client_id: String,
    /// None for public clients (credentials sent in body).
    /// Some for confidential clients (credentials sent via Basic auth).
    client_secret: Option<String>,
    redirect_uri: Option<String>,
}

impl OAuth2Client {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            redirect_uri,
        }
    }

    /// Build an authorization URL with standard parameters:
    /// response_type=code, client_id, state, scope (space-joined), redirect_uri.
    pub fn create_authorization_url(
        &self,
        authorization_endpoint: &str,
        state: &str,
        scopes: &[&str],
    ) -> Url {
        let mut url =
            Url::parse(authorization_endpoint).expect("invalid authorization endpoint URL");

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("state", state);

        if !scopes.is_empty() {
            url.query_pairs_mut()
                .append_pair("scope", &scopes.join(" "));
        }

        if let Some(ref redirect_uri) = self.redirect_uri {
            url.query_pairs_mut()
                .append_pair("redirect_uri", redirect_uri);
        }

        url
    }

    /// Exchange an authorization code for tokens.
    ///
    /// `redirect_uri`, when given, is sent instead of the configured one.
    /// The token endpoint requires it to match the URI used during the
    /// authorization request.
    pub async fn validate_authorization_code(
        &self,
        http_client: &impl HttpClient,
        token_endpoint: &str,
        code: &str,
        redirect_uri: Option<&str>,
    ) -> Result<OAuth2Tokens, Error> {
        let mut body = vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("code".to_string(), code.to_string()),
        ];

        let effective_redirect = redirect_uri.or(self.redirect_uri.as_deref());
        if let Some(uri) = effective_redirect {
            body.push(("redirect_uri".to_string(), uri.to_string()));
        }

        if self.client_secret.is_none() {
            body.push(("client_id".to_string(), self.client_id.clone()));
        }

        let mut request = create_oauth2_request(token_endpoint, &body);

        if let Some(ref secret) = self.client_secret {
            request.headers.push((
                "Authorization".to_string(),
                encode_basic_credentials(&self.client_id, secret),
            ));
        }

        send_token_request(http_client, request).await
    }

    /// Refresh an access token.
    pub async fn refresh_access_token(
        &self,
        http_client: &impl HttpClient,
        token_endpoint: &str,
        refresh_token: &str,
        scopes: &[&str],
    ) -> Result<OAuth2Tokens, Error> {
        let mut body = vec![
            ("grant_type".to_string(), "refresh_token".to_string()),
            ("refresh_token".to_string(), refresh_token.to_string()),
        ];

        if !scopes.is_empty() {
            body.push(("scope".to_string(), scopes.join(" ")));
        }

        if self.client_secret.is_none() {
            body.push(("client_id".to_string(), self.client_id.clone()));
        }

        let mut request = create_oauth2_request(token_endpoint, &body);

        if let Some(ref secret) = self.client_secret {
            request.headers.push((
                "Authorization".to_string(),
                encode_basic_credentials(&self.client_id, secret),
            ));
        }

        send_token_request(http_client, request).await
    }

    /// Revoke a token (RFC 7009).
    pub async fn revoke_token(
        &self,
        http_client: &impl HttpClient,
        revocation_endpoint: &str,
        token: &str,
    ) -> Result<(), Error> {
        let mut body = vec![("token".to_string(), token.to_string())];

        if self.client_secret.is_none() {
            body.push(("client_id".to_string(), self.client_id.clone()));
        }

        let mut request = create_oauth2_request(revocation_endpoint, &body);

        if let Some(ref secret) = self.client_secret {
            request.headers.push((
                "Authorization".to_string(),
                encode_basic_credentials(&self.client_id, secret),
            ));
        }

        let response = http_client.send(request).await?;

        match response.status {
            200 => Ok(()),
            status => Err(Error::UnexpectedResponse { status }),
        }
    }
}
