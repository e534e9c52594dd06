pub mod api_key;
pub mod fingerprint;

pub use api_key::{API_KEY_SCHEME, ApiKeyError, get_api_key};
pub use fingerprint::key_fingerprint;
