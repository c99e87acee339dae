//! HTTP request handlers for the romanos API
//!
//! Implements the conversion endpoints (`/a2r`, `/r2a`), the
//! informational root route and the catch-all 404.

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::Uri,
    Json,
};

use crate::core::converter::{arabic_to_roman, parse_arabic, roman_to_arabic};
use crate::core::error::RomanosError;
use crate::core::types::*;

/// Description returned by `GET /`
pub const SERVICE_DESCRIPTION: &str = "Roman and Arabic numeral conversion API";

/// Arabic to Roman handler
///
/// Converts the `arabic` query parameter to its canonical Roman
/// numeral.
///
/// # Errors
///
/// - `MissingParameter`: `arabic` is absent or empty
/// - `MalformedParameter`: `arabic` is not a plain base-10 integer
/// - `OutOfRange`: the integer is outside 1..=3999
pub async fn a2r_handler(
    query: Result<Query<ArabicQuery>, QueryRejection>,
) -> Result<Json<RomanResponse>, RomanosError> {
    let Query(params) =
        query.map_err(|_| RomanosError::MalformedParameter("arabic".to_string()))?;

    let text = params.arabic.unwrap_or_default();
    let value = parse_arabic(&text)?;
    let roman = arabic_to_roman(value)?;

    Ok(Json(RomanResponse { roman }))
}

/// Roman to Arabic handler
///
/// Converts the `roman` query parameter to its integer value. Only
/// canonical uppercase numerals are accepted.
///
/// # Errors
///
/// - `MissingParameter`: `roman` is absent or empty
/// - `InvalidNumeral`: `roman` is not a canonical numeral in 1..=3999
pub async fn r2a_handler(
    query: Result<Query<RomanQuery>, QueryRejection>,
) -> Result<Json<ArabicResponse>, RomanosError> {
    let Query(params) =
        query.map_err(|_| RomanosError::MalformedParameter("roman".to_string()))?;

    let roman = params
        .roman
        .filter(|r| !r.is_empty())
        .ok_or_else(|| RomanosError::MissingParameter("roman".to_string()))?;
    let arabic = roman_to_arabic(&roman)?;

    Ok(Json(ArabicResponse { arabic }))
}

/// Root handler
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: SERVICE_DESCRIPTION.to_string(),
    })
}

/// Fallback for unmatched routes and unsupported methods
pub async fn not_found_handler(uri: Uri) -> RomanosError {
    RomanosError::RouteNotFound(uri.path().to_string())
}
