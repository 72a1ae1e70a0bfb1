//! JWT 令牌的签发与校验。
//!
//! 受保护的路由通过 `authenticated_user` 从 Authorization 头解析出当前用户。

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use config::JwtConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// 令牌负载。`sub` 是用户 id，`exp` 是过期时刻的 Unix 时间戳。
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
}

#[derive(Clone)]
pub struct JwtService {
    token_ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            token_ttl: Duration::hours(config.expiration_hours),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// 为一个用户签发带过期时间的令牌。
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, ApiError> {
        let claims = Claims {
            sub: user_id,
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| ApiError::unauthorized(format!("token signing failed: {err}")))
    }

    /// 解析请求头里的 bearer 令牌，返回其中的用户 id。
    pub fn authenticated_user(&self, headers: &HeaderMap) -> Result<Uuid, ApiError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

        let token = value
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| ApiError::unauthorized("authorization header is not a bearer token"))?;

        Ok(self.decode_claims(token)?.sub)
    }

    // 默认 Validation 会校验 exp，过期令牌在这里被拒绝。
    fn decode_claims(&self, token: &str) -> Result<Claims, ApiError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| ApiError::unauthorized(format!("invalid token: {err}")))
    }
}
