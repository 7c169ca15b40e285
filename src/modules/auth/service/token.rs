use chrono::{NaiveDateTime, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ulid::Ulid;

use crate::types::AuthContext;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    pub sub: String,
    pub jti: String,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> NaiveDateTime {
        chrono::DateTime::<Utc>::from_timestamp(self.exp, 0)
            .map(|at| at.naive_utc())
            .unwrap_or_else(|| Utc::now().naive_utc())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Token has expired")]
    Expired,
    #[error("Token is invalid")]
    Invalid,
    #[error("Expected a {0:?} token")]
    WrongKind(TokenKind),
    #[error("Failed to encode token")]
    Encode,
}

pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 30;
    validation.validate_exp = true;
    validation
}

pub fn issue(auth: &AuthContext, user_id: &str, kind: TokenKind) -> Result<String, Error> {
    let now = Utc::now();
    let ttl = match kind {
        TokenKind::Access => auth.access_token_ttl,
        TokenKind::Refresh => auth.refresh_token_ttl,
    };
    let claims = Claims {
        sub: user_id.to_string(),
        jti: Ulid::new().to_string(),
        kind,
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &auth.encoding_key).map_err(
        |err| {
            tracing::error!("Failed to encode {:?} token: {}", kind, err);
            Error::Encode
        },
    )
}

pub fn issue_pair(auth: &AuthContext, user_id: &str) -> Result<TokenPair, Error> {
    Ok(TokenPair {
        access: issue(auth, user_id, TokenKind::Access)?,
        refresh: issue(auth, user_id, TokenKind::Refresh)?,
    })
}

pub fn decode(auth: &AuthContext, token: &str, expected: TokenKind) -> Result<Claims, Error> {
    let claims = jsonwebtoken::decode::<Claims>(token.trim(), &auth.decoding_key, &validation())
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => Error::Expired,
            _ => Error::Invalid,
        })?;

    if claims.kind != expected {
        return Err(Error::WrongKind(expected));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test;
    use jsonwebtoken::EncodingKey;

    #[test]
    fn access_tokens_decode_to_their_subject() {
        let auth = test::auth_context();
        let token = issue(&auth, "01HZY3J8N0Q9W2XKX7T6B5C4D3", TokenKind::Access).unwrap();

        let claims = decode(&auth, &token, TokenKind::Access).unwrap();
        assert_eq!(claims.sub, "01HZY3J8N0Q9W2XKX7T6B5C4D3");
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn refresh_tokens_are_not_access_tokens() {
        let auth = test::auth_context();
        let pair = issue_pair(&auth, "user").unwrap();

        assert_eq!(
            decode(&auth, &pair.refresh, TokenKind::Access).unwrap_err(),
            Error::WrongKind(TokenKind::Access)
        );
        assert!(decode(&auth, &pair.refresh, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn every_token_gets_its_own_id() {
        let auth = test::auth_context();
        let first = issue(&auth, "user", TokenKind::Refresh).unwrap();
        let second = issue(&auth, "user", TokenKind::Refresh).unwrap();

        let first = decode(&auth, &first, TokenKind::Refresh).unwrap();
        let second = decode(&auth, &second, TokenKind::Refresh).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn tokens_signed_with_another_secret_are_invalid() {
        let auth = test::auth_context();
        let mut other = test::auth_context();
        other.encoding_key = EncodingKey::from_secret(b"someone-else");

        let token = issue(&other, "user", TokenKind::Access).unwrap();
        assert_eq!(
            decode(&auth, &token, TokenKind::Access).unwrap_err(),
            Error::Invalid
        );
        assert_eq!(
            decode(&auth, "garbage", TokenKind::Access).unwrap_err(),
            Error::Invalid
        );
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let auth = test::auth_context();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user".to_string(),
            jti: Ulid::new().to_string(),
            kind: TokenKind::Access,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token =
            jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &auth.encoding_key)
                .unwrap();

        assert_eq!(
            decode(&auth, &token, TokenKind::Access).unwrap_err(),
            Error::Expired
        );
    }
}
