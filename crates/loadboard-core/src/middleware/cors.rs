// CORS middleware
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use loadboard_types::{AccessPolicy, Allowance, PolicyError};

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

/// Build the CORS layer for `policy`.
///
/// `Allowance::Any` for methods and headers mirrors the preflight request,
/// since a literal `*` is ignored by browsers on credentialed requests.
/// Preflight `OPTIONS` requests are answered by the layer itself.
pub fn cors_layer(policy: &AccessPolicy) -> Result<CorsLayer, PolicyError> {
    let allow_origin = if policy.has_wildcard_origin() {
        if policy.allow_credentials {
            return Err(PolicyError::WildcardWithCredentials);
        }
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(&policy.allowed_origins)?)
    };

    let allow_methods = match &policy.allowed_methods {
        Allowance::Any => AllowMethods::mirror_request(),
        Allowance::Only(methods) => AllowMethods::list(parse_methods(methods)?),
    };

    let allow_headers = match &policy.allowed_headers {
        Allowance::Any => AllowHeaders::mirror_request(),
        Allowance::Only(headers) => AllowHeaders::list(parse_headers(headers)?),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(allow_methods)
        .allow_headers(allow_headers)
        .allow_credentials(policy.allow_credentials)
        .max_age(PREFLIGHT_MAX_AGE))
}

fn parse_origins(origins: &[String]) -> Result<Vec<HeaderValue>, PolicyError> {
    origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| PolicyError::InvalidOrigin {
                origin: origin.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

fn parse_methods(methods: &[String]) -> Result<Vec<Method>, PolicyError> {
    methods
        .iter()
        .map(|m| {
            Method::from_bytes(m.to_ascii_uppercase().as_bytes())
                .map_err(|_| PolicyError::InvalidMethod { method: m.clone() })
        })
        .collect()
}

fn parse_headers(headers: &[String]) -> Result<Vec<HeaderName>, PolicyError> {
    headers
        .iter()
        .map(|h| {
            HeaderName::from_bytes(h.as_bytes())
                .map_err(|_| PolicyError::InvalidHeader { header: h.clone() })
        })
        .collect()
}
