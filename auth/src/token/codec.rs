use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed session tokens.
///
/// Tokens are compact JWTs signed with HS256. The signing algorithm is
/// pinned on verification: a token whose header names any other method
/// is rejected as a signature failure, never verified under a
/// substituted algorithm.
///
/// Expiry is evaluated against the `now` passed to [`verify`], not the
/// wall clock, so a token's validity is always relative to the moment
/// of verification.
///
/// [`verify`]: TokenCodec::verify
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    session_window: Duration,
}

impl TokenCodec {
    /// Create a codec from the process-wide secret key.
    ///
    /// # Arguments
    /// * `secret` - Signing key; rotating it invalidates every
    ///   outstanding token, which the bounded session window makes
    ///   acceptable
    /// * `session_window` - Fixed duration from issuance to expiry
    pub fn new(secret: &[u8], session_window: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            session_window,
        }
    }

    /// Issue a signed token for `user_id`, valid from `now` for one
    /// session window.
    ///
    /// # Errors
    /// * `Encoding` - Claims serialization or signing failed
    pub fn issue(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, now, self.session_window);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify a token and return the embedded identity.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `InvalidSignature` - Signature or signing method does not
    ///   match the pinned algorithm and key
    /// * `Expired` - `now` is at or past the token's expiry
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<i64, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed,
                }
            })?;

        if token_data.claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, Duration::hours(12))
    }

    fn issued_at() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_issue_and_verify_within_window() {
        let codec = codec();
        let now = issued_at();

        let token = codec.issue(42, now).expect("Failed to issue token");

        assert_eq!(codec.verify(&token, now).unwrap(), 42);
        assert_eq!(
            codec
                .verify(&token, now + Duration::hours(11) + Duration::minutes(59))
                .unwrap(),
            42
        );
    }

    #[test]
    fn test_verify_expired_token() {
        let codec = codec();
        let now = issued_at();

        let token = codec.issue(42, now).expect("Failed to issue token");

        // Expiry boundary is inclusive: now >= exp fails
        assert_eq!(
            codec.verify(&token, now + Duration::hours(12)),
            Err(TokenError::Expired)
        );
        assert_eq!(
            codec.verify(&token, now + Duration::days(2)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_verify_malformed_token() {
        let codec = codec();

        assert_eq!(
            codec.verify("not-a-token", issued_at()),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            codec.verify("invalid.token.here", issued_at()),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_verify_tampered_signature() {
        let codec = codec();
        let now = issued_at();

        let token = codec.issue(42, now).expect("Failed to issue token");

        // Flip one byte in the middle of the signature segment
        let signature_start = token.rfind('.').unwrap() + 1;
        let target = signature_start + 10;
        let original = token.as_bytes()[target];
        let replacement = if original == b'A' { b'B' } else { b'A' };
        let mut bytes = token.into_bytes();
        bytes[target] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();

        assert_eq!(
            codec.verify(&tampered, now),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenCodec::new(b"secret_one_at_least_32_bytes_long!", Duration::hours(12));
        let verifier = TokenCodec::new(b"secret_two_at_least_32_bytes_long!", Duration::hours(12));
        let now = issued_at();

        let token = issuer.issue(42, now).expect("Failed to issue token");

        assert_eq!(
            verifier.verify(&token, now),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_rejects_substituted_algorithm() {
        let codec = codec();
        let now = issued_at();

        // Same key, different signing method: must not verify
        let claims = Claims::new(42, now, Duration::hours(12));
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        assert_eq!(
            codec.verify(&token, now),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_error_messages_are_client_facing() {
        assert_eq!(TokenError::Malformed.to_string(), "invalid token");
        assert_eq!(TokenError::Expired.to_string(), "token is expired");
        assert_eq!(
            TokenError::InvalidSignature.to_string(),
            "invalid token signature"
        );
    }
}
