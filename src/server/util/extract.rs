//! Custom Axum extractors.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts, uri::Authority},
    Json,
};
use serde_json::{Map, Value};
use std::convert::Infallible;

use crate::server::{
    error::AppError,
    state::AppState,
    util::{
        hyperlink::ResourceUrls,
        validate::{json_type_name, FieldErrors},
    },
};

/// Request body that must be a JSON object.
///
/// Bodies that are not valid JSON are rejected with 400 and a parse message. Valid
/// JSON that is not an object is rejected with 400 under `non_field_errors`.
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!("JSON parse error - {}", rejection.body_text()))
            })?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(FieldErrors::non_field(format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(&other)
            ))
            .into()),
        }
    }
}

/// Absolute URL builder for the current request.
///
/// Uses the configured public URL when present. Otherwise the base is `http://` plus the
/// request authority, taken from the URI (HTTP/2 `:authority`) or the `Host` header. An
/// authority that does not parse as `host[:port]` falls back to `localhost`.
impl FromRequestParts<AppState> for ResourceUrls {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(public_url) = &state.public_url {
            return Ok(Self::new(public_url.clone()));
        }

        let host = request_authority(parts).unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self::new(format!("http://{}", host)))
    }
}

const DEFAULT_HOST: &str = "localhost";

fn request_authority(parts: &Parts) -> Option<String> {
    if let Some(authority) = parts.uri.authority() {
        return valid_authority(authority.as_str());
    }

    parts
        .headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(valid_authority)
}

/// Accepts `host[:port]` only. Userinfo, paths and anything else are rejected.
fn valid_authority(value: &str) -> Option<String> {
    let authority = value.parse::<Authority>().ok()?;

    if authority.as_str().contains('@') || authority.host().is_empty() {
        return None;
    }

    Some(authority.as_str().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_host_and_port() {
        assert_eq!(valid_authority("localhost:8000").as_deref(), Some("localhost:8000"));
        assert_eq!(valid_authority("API.Example.com").as_deref(), Some("api.example.com"));
        assert_eq!(valid_authority("[::1]:8000").as_deref(), Some("[::1]:8000"));
    }

    #[test]
    fn rejects_injected_hosts() {
        assert_eq!(valid_authority("evil.com/phish?"), None);
        assert_eq!(valid_authority("user@evil.com"), None);
        assert_eq!(valid_authority("evil.com\"><b>"), None);
        assert_eq!(valid_authority(""), None);
    }
}
