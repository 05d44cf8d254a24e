// tests/support/mocks/mod.rs
pub mod catalog;
pub mod security;
pub mod time;

pub use catalog::InMemoryCatalog;
pub use security::{
    DummyTokenManager, EXPIRED_TOKEN, MEMBER_TOKEN, OTHER_MEMBER_TOKEN, TEST_TOKEN, admin_user,
    member_user, other_member_user,
};
pub use time::{FixedClock, fixed_now};
