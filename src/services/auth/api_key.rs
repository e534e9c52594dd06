//! `Authorization: ApiKey <token>` credential extraction.
//!
//! This module is core-only: it knows nothing about middleware, responses or
//! logging. Callers decide how each error surfaces to the client.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Scheme token expected as the first word of the `Authorization` value.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// - Missing header or empty value: `NoAuthHeaderIncluded`.
/// - Anything other than exactly the `ApiKey` scheme plus one token:
///   `MalformedAuthHeader`. The scheme is matched case-sensitively.
///
/// Only the first `Authorization` entry is looked at.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ApiKeyError::NoAuthHeaderIncluded),
    };

    // Opaque (non visible-ASCII) bytes can never spell `ApiKey <token>`.
    let value = value
        .to_str()
        .map_err(|_| ApiKeyError::MalformedAuthHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(API_KEY_SCHEME), Some(token), None) => Ok(token),
        _ => Err(ApiKeyError::MalformedAuthHeader),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn no_authorization_header() {
        let headers = HeaderMap::new();
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::NoAuthHeaderIncluded)
        );
    }

    #[test]
    fn empty_authorization_header_counts_as_missing() {
        let headers = headers_with("");
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::NoAuthHeaderIncluded)
        );
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        let headers = headers_with("Bearer some-api-key");
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::MalformedAuthHeader)
        );
    }

    #[test]
    fn scheme_without_token_is_malformed() {
        let headers = headers_with("ApiKey");
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::MalformedAuthHeader)
        );
    }

    #[test]
    fn valid_header_returns_token() {
        let headers = headers_with("ApiKey my-secret-key");
        assert_eq!(get_api_key(&headers), Ok("my-secret-key"));
    }

    #[test]
    fn scheme_is_case_sensitive() {
        for value in ["apikey my-secret-key", "APIKEY my-secret-key", "Apikey k"] {
            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
            assert_eq!(
                get_api_key(&headers),
                Err(ApiKeyError::MalformedAuthHeader),
                "{value}"
            );
        }
    }

    #[test]
    fn extra_tokens_are_malformed() {
        let headers = headers_with("ApiKey my-secret-key trailing");
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::MalformedAuthHeader)
        );
    }

    #[test]
    fn scheme_only_with_whitespace_is_malformed() {
        let headers = headers_with("ApiKey   ");
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::MalformedAuthHeader)
        );
    }

    #[test]
    fn whitespace_only_value_is_malformed() {
        let headers = headers_with("   ");
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::MalformedAuthHeader)
        );
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let headers = headers_with("ApiKey \t my-secret-key");
        assert_eq!(get_api_key(&headers), Ok("my-secret-key"));
    }

    #[test]
    fn opaque_bytes_are_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xffkey").unwrap(),
        );
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::MalformedAuthHeader)
        );
    }

    #[test]
    fn first_authorization_entry_wins() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Ok("first"));
    }

    #[test]
    fn repeated_calls_agree() {
        let ok = headers_with("ApiKey my-secret-key");
        let bad = headers_with("Bearer some-api-key");
        assert_eq!(get_api_key(&ok), get_api_key(&ok));
        assert_eq!(get_api_key(&bad), get_api_key(&bad));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiKeyError::NoAuthHeaderIncluded.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            ApiKeyError::MalformedAuthHeader.to_string(),
            "malformed authorization header"
        );
    }
}
