//! Request signing for the CloudStack API

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::error::ApiError;
use super::params::Params;

/// Authenticates an outgoing request.
///
/// `params` already carries `command` and `response`; the signer adds
/// whatever the server needs to authenticate the call.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, params: &mut Params) -> Result<(), ApiError>;
}

/// API key + HMAC-SHA1 signature, the scheme the management server expects.
pub struct HmacSigner {
    api_key: String,
    secret_key: String,
}

impl HmacSigner {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Signature over the sorted, value-encoded, lower-cased query string.
    pub fn signature(&self, params: &Params) -> Result<String, ApiError> {
        let unsigned = params.to_query_string().to_lowercase();

        let mut mac = Hmac::<Sha1>::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| ApiError::InvalidConfig(format!("invalid secret key: {}", e)))?;
        mac.update(unsigned.as_bytes());

        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl RequestSigner for HmacSigner {
    fn sign(&self, params: &mut Params) -> Result<(), ApiError> {
        params.remove("signature");
        params.set("apiKey", &self.api_key);
        let signature = self.signature(params)?;
        params.set("signature", signature);
        Ok(())
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
