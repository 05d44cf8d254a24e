// tests/support/mocks/security.rs
use async_trait::async_trait;
use campus_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use campus_core::domain::user::{Role, UserId};
use chrono::{DateTime, Duration, Utc};

pub const TEST_TOKEN: &str = "test-token";
pub const MEMBER_TOKEN: &str = "member-token";
pub const OTHER_MEMBER_TOKEN: &str = "other-member-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(admin_user()),
            MEMBER_TOKEN => Ok(member_user()),
            OTHER_MEMBER_TOKEN => Ok(other_member_user()),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }

    async fn public_jwk(&self) -> ApplicationResult<serde_json::Value> {
        Ok(serde_json::json!({
            "keys": [{ "kty": "OKP", "crv": "Ed25519", "x": "dGVzdA" }]
        }))
    }
}

fn user(id: i64, username: &str, role: Role, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn admin_user() -> AuthenticatedUser {
    user(1, "admin", Role::Admin, super::time::fixed_now())
}

pub fn member_user() -> AuthenticatedUser {
    user(2, "mina", Role::Member, super::time::fixed_now())
}

pub fn other_member_user() -> AuthenticatedUser {
    user(3, "otto", Role::Member, super::time::fixed_now())
}
