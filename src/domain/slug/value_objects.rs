// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::ListingId;
use std::fmt;

const MAX_FIELD_LEN: usize = 63;

/// URL-safe identifier: lower-case ASCII letters, digits and single inner hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let well_formed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--");
        if !well_formed {
            return Err(DomainError::Validation(format!(
                "slug '{value}' must be lowercase kebab-case"
            )));
        }
        Ok(Self(value))
    }

    /// Lower-cases path input before validating it.
    pub fn from_path(value: &str) -> DomainResult<Self> {
        Self::new(value.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Name of the attribute holding the slug. Spliced into queries, so restricted to
/// plain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugField(String);

impl SlugField {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let mut chars = value.chars();
        let valid_head = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
        let valid_tail = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid_head || !valid_tail || value.len() > MAX_FIELD_LEN {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a valid slug field name"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SlugField {
    fn default() -> Self {
        Self("slug".into())
    }
}

impl fmt::Display for SlugField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the slug is for a new entity or for renaming an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlugTarget {
    #[default]
    Create,
    /// The entity being renamed never collides with itself.
    Update(ListingId),
}

impl SlugTarget {
    pub fn excluded_id(&self) -> Option<ListingId> {
        match self {
            SlugTarget::Create => None,
            SlugTarget::Update(id) => Some(*id),
        }
    }
}
