//! Admin session service
//!
//! 没有多用户账户体系：一个共享管理口令，argon2 校验，换取带过期
//! 时间的不透明 uuid 会话令牌。令牌表保存在进程内存，重启即失效。

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Serialize;

/// An issued admin session
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// In-memory admin session table
#[derive(Debug)]
pub struct AdminSessions {
    /// argon2 PHC string of the admin password
    password_hash: String,
    ttl: Duration,
    tokens: DashMap<String, DateTime<Utc>>,
}

impl AdminSessions {
    pub fn new(password_hash: String, ttl_minutes: i64) -> Self {
        Self {
            password_hash,
            ttl: Duration::minutes(ttl_minutes),
            tokens: DashMap::new(),
        }
    }

    /// Hash a plaintext password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// Verify a plaintext password against the configured hash
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify the password and issue a session token on success
    pub fn login(&self, password: &str) -> Result<Option<Session>, argon2::password_hash::Error> {
        if !self.verify_password(password)? {
            return Ok(None);
        }

        let token = uuid::Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.ttl;
        self.tokens.insert(token.clone(), expires_at);
        Ok(Some(Session { token, expires_at }))
    }

    /// Check a presented token; expired tokens are dropped from the table
    pub fn validate(&self, token: &str) -> bool {
        let valid = match self.tokens.get(token) {
            Some(expires_at) => *expires_at > Utc::now(),
            None => return false,
        };
        if !valid {
            self.tokens.remove(token);
        }
        valid
    }

    /// Revoke a token (logout); unknown tokens are ignored
    pub fn revoke(&self, token: &str) {
        self.tokens.remove(token);
    }
}
