// src/domain/relation/entity.rs
use crate::domain::errors::DomainError;
use crate::domain::listing::{Collection, ListingId};
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Per-user relation to a listing that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Bookmark,
    Member,
    Vote,
}

impl RelationKind {
    pub const ALL: [RelationKind; 3] = [
        RelationKind::Bookmark,
        RelationKind::Member,
        RelationKind::Vote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Bookmark => "bookmark",
            RelationKind::Member => "member",
            RelationKind::Vote => "vote",
        }
    }

    /// Capability action under the `relations` resource needed to change this kind.
    pub fn required_action(&self) -> &'static str {
        match self {
            RelationKind::Bookmark => "bookmark",
            RelationKind::Member => "join",
            RelationKind::Vote => "vote",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::NotFound(format!("unknown relation '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationKey {
    pub collection: Collection,
    pub listing_id: ListingId,
    pub kind: RelationKind,
    pub user_id: UserId,
}

/// State after a relation change, as observed by the statement that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationState {
    pub active: bool,
    /// Whether this call changed anything.
    pub changed: bool,
    pub count: u64,
}
