use base64::Engine;

use crate::Error;
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::tokens::OAuth2Tokens;

/// Build a standard OAuth2 POST request.
/// Sets Content-Type, Accept: application/json, User-Agent: gitlab-oauth-flow.
pub fn create_oauth2_request(endpoint: &str, body: &[(String, String)]) -> HttpRequest {
    let encoded_body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(body)
        .finish();

    HttpRequest {
        url: endpoint.to_string(),
        headers: vec![
            (
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), "gitlab-oauth-flow".to_string()),
        ],
        body: encoded_body.into_bytes(),
    }
}

/// Encode client credentials as HTTP Basic auth header value.
/// Returns `Basic <base64(client_id:client_secret)>`.
pub fn encode_basic_credentials(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{client_id}:{client_secret}");
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    format!("Basic {encoded}")
}

/// Send a token request and interpret the response.
/// - 200 -> Ok(OAuth2Tokens)
/// - 400/401 with valid error JSON -> Err(Error::OAuthRequest { .. })
/// - 400/401 with invalid body -> Err(Error::UnexpectedErrorBody { .. })
/// - Other status -> Err(Error::UnexpectedResponse { .. })
pub async fn send_token_request(
    client: &(impl HttpClient + ?Sized),
    request: HttpRequest,
) -> Result<OAuth2Tokens, Error> {
    log::debug!("POST {}", request.url);
    let response: HttpResponse = client.send(request).await?;
    log::debug!("token endpoint responded with HTTP {}", response.status);

    match response.status {
        200 => {
            let json: serde_json::Value =
                serde_json::from_slice(&response.body).map_err(|_| Error::UnexpectedErrorBody {
                    status: 200,
                    body: String::from_utf8_lossy(&response.body).into_owned(),
                })?;
            Ok(OAuth2Tokens::new(json))
        }
        400 | 401 => {
            let body_str = String::from_utf8_lossy(&response.body).into_owned();
            match serde_json::from_str::<serde_json::Value>(&body_str) {
                Ok(json) if json.get("error").and_then(|e| e.as_str()).is_some() => {
                    Err(Error::OAuthRequest {
                        code: json["error"].as_str().unwrap().to_string(),
                        description: json
                            .get("error_description")
                            .and_then(|v| v.as_str())
                            .map(String::from),
                        uri: json
                            .get("error_uri")
                            .and_then(|v| v.as_str())
                            .map(String::from),
                        state: json.get("state").and_then(|v| v.as_str()).map(String::from),
                    })
                }
                _ => Err(Error::UnexpectedErrorBody {
                    status: response.status,
                    body: body_str,
                }),
            }
        }
        status => Err(Error::UnexpectedResponse { status }),
    }
}
