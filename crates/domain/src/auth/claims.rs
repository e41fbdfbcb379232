//! Decoding of bearer token claims.
//!
//! Tokens are JWT-shaped: three dot-separated base64url segments. Only the
//! payload is read; the signature is the server's concern.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Claims the client cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Expiry instant from the `exp` claim, if present.
    pub expires_at: Option<DateTime<Utc>>,
    /// Values of the `roles` claim, in order.
    pub roles: Vec<String>,
}

impl TokenClaims {
    /// First role in the `roles` claim.
    #[must_use]
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

/// Why a token could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidToken {
    /// Not exactly three segments.
    SegmentCount(usize),
    /// Payload segment is not base64url.
    Base64,
    /// Payload is not a JSON object of the expected shape.
    Json,
}

impl std::fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SegmentCount(n) => write!(f, "expected 3 token segments, found {n}"),
            Self::Base64 => f.write_str("token payload is not valid base64url"),
            Self::Json => f.write_str("token payload is not a JSON claims object"),
        }
    }
}

/// Outcome of decoding a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimsDecode {
    /// The payload decoded into claims.
    Valid(TokenClaims),
    /// The token is malformed.
    Invalid(InvalidToken),
}

impl ClaimsDecode {
    /// Returns the claims if decoding succeeded.
    #[must_use]
    pub const fn claims(&self) -> Option<&TokenClaims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Invalid(_) => None,
        }
    }
}

/// Decodes the payload segment of a token.
///
/// Never panics; every malformed input maps to `ClaimsDecode::Invalid`.
#[must_use]
pub fn decode_claims(token: &str) -> ClaimsDecode {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return ClaimsDecode::Invalid(InvalidToken::SegmentCount(segments.len()));
    }

    let payload = segments[1].trim_end_matches('=');
    let Ok(bytes) = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
    else {
        return ClaimsDecode::Invalid(InvalidToken::Base64);
    };

    let Ok(Value::Object(payload)) = serde_json::from_slice::<Value>(&bytes) else {
        return ClaimsDecode::Invalid(InvalidToken::Json);
    };

    // `exp` and `roles` are read independently; an odd `roles` shape never
    // hides a usable expiry.
    let expires_at = payload
        .get("exp")
        .and_then(Value::as_f64)
        .filter(|exp| exp.is_finite())
        .and_then(|exp| DateTime::from_timestamp_millis((exp * 1000.0) as i64));

    ClaimsDecode::Valid(TokenClaims {
        expires_at,
        roles: string_roles(payload.get("roles")),
    })
}

/// Roles from an array of strings; any other shape yields no roles.
fn string_roles(roles: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = roles else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_valid_claims() {
        let token = token_with(r#"{"exp":1700000000,"roles":["student","admin"]}"#);
        let decoded = decode_claims(&token);
        let claims = decoded.claims().cloned().unwrap();

        assert_eq!(claims.expires_at, DateTime::from_timestamp(1_700_000_000, 0));
        assert_eq!(claims.primary_role(), Some("student"));
    }

    #[test]
    fn test_missing_claims_decode_as_empty() {
        let decoded = decode_claims(&token_with("{}"));
        assert_eq!(
            decoded,
            ClaimsDecode::Valid(TokenClaims {
                expires_at: None,
                roles: vec![],
            })
        );
    }

    #[test]
    fn test_wrong_segment_count() {
        assert_eq!(
            decode_claims("abc.def"),
            ClaimsDecode::Invalid(InvalidToken::SegmentCount(2))
        );
        assert_eq!(
            decode_claims(""),
            ClaimsDecode::Invalid(InvalidToken::SegmentCount(1))
        );
    }

    #[test]
    fn test_non_base64_payload() {
        assert_eq!(
            decode_claims("a.!!!.c"),
            ClaimsDecode::Invalid(InvalidToken::Base64)
        );
    }

    #[test]
    fn test_non_json_payload() {
        let token = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert_eq!(
            decode_claims(&token),
            ClaimsDecode::Invalid(InvalidToken::Json)
        );
    }

    #[test]
    fn test_odd_roles_shapes_keep_expiry() {
        for roles in ["null", r#""student""#, r#"[{"authority":"ROLE_STUDENT"}]"#, "[1, \"x\"]"] {
            let token = token_with(&format!(r#"{{"exp":1700000000,"roles":{roles}}}"#));
            let decoded = decode_claims(&token);
            let claims = decoded.claims().cloned().unwrap();

            assert_eq!(claims.expires_at, DateTime::from_timestamp(1_700_000_000, 0));
            assert_eq!(claims.primary_role(), None, "roles = {roles}");
        }
    }

    #[test]
    fn test_non_object_payload_is_json_error() {
        assert_eq!(
            decode_claims(&token_with("[1,2,3]")),
            ClaimsDecode::Invalid(InvalidToken::Json)
        );
    }

    #[test]
    fn test_padded_payload_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"roles":["parent"]}"#);
        let decoded = decode_claims(&format!("h.{payload}.s"));
        assert_eq!(
            decoded.claims().and_then(TokenClaims::primary_role),
            Some("parent")
        );
    }
}
