//! Signed download links: an HS256 JWT binding a file path, an order id and
//! an expiry instant to the server's shared secret. Verification is a pure
//! function of the token, the secret and the clock; there is no server-side
//! registry and no revocation before natural expiry.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadClaims {
    /// Path of the generated invoice file.
    pub file: String,
    /// Order id the file belongs to.
    pub order: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("link expired")]
    Expired,
    #[error("invalid link")]
    Invalid,
}

pub fn issue(
    secret: &str,
    file: &str,
    order_id: &str,
    expires_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let claims = DownloadClaims {
        file: file.to_string(),
        order: order_id.to_string(),
        exp: expires_at.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Decode and validate signature and expiry. An expired signature is reported
/// distinctly from a tampered or malformed one.
pub fn verify(secret: &str, token: &str) -> Result<DownloadClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<DownloadClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const SECRET: &str = "unit-test-secret";

    /// Flip the first character of the signature segment.
    fn tamper(token: &str) -> String {
        let dot = token.rfind('.').unwrap();
        let mut out = String::from(&token[..=dot]);
        let sig = &token[dot + 1..];
        let flipped = if sig.starts_with('A') { 'B' } else { 'A' };
        out.push(flipped);
        out.push_str(&sig[1..]);
        out
    }

    #[test]
    fn roundtrip_before_expiry() {
        let token = issue(SECRET, "invoices/INV1.pdf", "INV1", Utc::now() + Duration::minutes(30))
            .unwrap();
        let claims = verify(SECRET, &token).unwrap();
        assert_eq!(claims.file, "invoices/INV1.pdf");
        assert_eq!(claims.order, "INV1");
    }

    #[test]
    fn expired_token_is_expired_not_invalid() {
        let token =
            issue(SECRET, "invoices/INV1.pdf", "INV1", Utc::now() - Duration::hours(1)).unwrap();
        let err = verify(SECRET, &token).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn tampered_signature_is_invalid_not_expired() {
        // Even with an expiry already in the past, a bad signature must win.
        let token =
            issue(SECRET, "invoices/INV1.pdf", "INV1", Utc::now() - Duration::hours(1)).unwrap();
        let err = verify(SECRET, &tamper(&token)).unwrap_err();
        assert!(matches!(err, TokenError::Invalid));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let token = issue(SECRET, "invoices/INV1.pdf", "INV1", Utc::now() + Duration::minutes(30))
            .unwrap();
        let err = verify("some-other-secret", &token).unwrap_err();
        assert!(matches!(err, TokenError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        let err = verify(SECRET, "not-a-token").unwrap_err();
        assert!(matches!(err, TokenError::Invalid));
    }
}
