// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use crate::domain::listing::Collection;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(collection) = db_err
                .constraint()
                .and_then(Collection::from_slug_constraint)
            {
                return DomainError::SlugConflict(format!("{collection} slug"));
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Names the slug that lost the race, so the retry log says which one.
pub(super) fn with_slug(err: DomainError, slug: &str) -> DomainError {
    match err {
        DomainError::SlugConflict(_) => DomainError::SlugConflict(slug.to_string()),
        other => other,
    }
}
