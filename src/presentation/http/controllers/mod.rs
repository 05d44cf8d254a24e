// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod listings;
pub mod relations;

use crate::{
    application::error::ApplicationError,
    domain::{listing::Collection, relation::RelationKind},
};

use super::error::{HttpError, HttpResult};

// Unknown collections and relation kinds are routes that do not exist, hence 404.
pub(crate) fn parse_collection(raw: &str) -> HttpResult<Collection> {
    raw.parse::<Collection>().map_err(HttpError::from)
}

pub(crate) fn parse_kind(raw: &str) -> HttpResult<RelationKind> {
    raw.parse::<RelationKind>().map_err(HttpError::from)
}

pub(crate) fn parse_id(raw: &str) -> HttpResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        HttpError::from_error(ApplicationError::validation(format!(
            "invalid listing id '{raw}'"
        )))
    })
}
