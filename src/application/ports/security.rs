// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

/// Boundary to the session provider. Sessions are minted elsewhere; this service only
/// needs to verify them, `issue` exists for the provider side and for tests.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
    /// Public verification key as a JWK set.
    async fn public_jwk(&self) -> ApplicationResult<serde_json::Value>;
}
