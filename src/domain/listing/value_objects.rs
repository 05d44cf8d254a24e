// src/domain/listing/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const MAX_TITLE_CHARS: usize = 200;
const MAX_SUMMARY_CHARS: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingId(i64);

impl ListingId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("listing id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ListingId> for i64 {
    fn from(value: ListingId) -> Self {
        value.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named-entity collection. Slugs are unique per collection, never globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Products,
    Teams,
    Tours,
    Courses,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Products,
        Collection::Teams,
        Collection::Tours,
        Collection::Courses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Teams => "teams",
            Collection::Tours => "tours",
            Collection::Courses => "courses",
        }
    }

    /// Backing table. Each collection lives in its own table with the same shape.
    pub fn table(&self) -> &'static str {
        self.as_str()
    }

    /// Name of the unique constraint guarding the slug column.
    pub fn slug_constraint(&self) -> &'static str {
        match self {
            Collection::Products => "products_slug_key",
            Collection::Teams => "teams_slug_key",
            Collection::Tours => "tours_slug_key",
            Collection::Courses => "courses_slug_key",
        }
    }

    pub fn from_slug_constraint(constraint: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.slug_constraint() == constraint)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| DomainError::NotFound(format!("unknown collection '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTitle(String);

impl ListingTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TITLE_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ListingTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary(String);

impl ListingSummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_SUMMARY_CHARS {
            return Err(DomainError::Validation(format!(
                "summary must be at most {MAX_SUMMARY_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
