use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::{RngExt, rng};

/// Generate a cryptographically random state parameter.
/// 32 random bytes, base64url-encoded without padding.
///
/// The caller stores it in the user's session before redirecting and
/// compares it against [`CallbackParams::state`](crate::CallbackParams::state)
/// on callback.
pub fn generate_state() -> String {
    let bytes: [u8; 32] = rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}
