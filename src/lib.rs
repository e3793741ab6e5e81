mod callback;
mod client;
mod error;
mod flow;
mod http;
mod providers;
mod request;
mod state;
mod tokens;

// Core
pub use callback::CallbackParams;
pub use error::Error;
pub use flow::{AuthCodeFlow, TokenExchanger};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use tokens::OAuth2Tokens;

// Generic client, for callers composing their own provider wrappers
pub use client::OAuth2Client;

// Utilities
pub use state::generate_state;

// Default HTTP client (behind feature flag)
#[cfg(feature = "reqwest-client")]
pub use http::default_client;

// Provider
pub use providers::gitlab::{GitLab, GitLabOptions};
