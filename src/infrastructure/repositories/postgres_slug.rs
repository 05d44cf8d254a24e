// src/infrastructure/repositories/postgres_slug.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::listing::{Collection, ListingId};
use crate::domain::slug::{SlugField, SlugPattern, SlugStore};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Slug lookups against the per-collection tables. `SlugField` is an identifier by
/// construction, so it can be quoted straight into the statement.
#[derive(Clone)]
pub struct PostgresSlugStore {
    pool: PgPool,
}

impl PostgresSlugStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select<'a>(collection: Collection, field: &SlugField) -> QueryBuilder<'a, Postgres> {
        let mut builder = QueryBuilder::new("SELECT \"");
        builder.push(field.as_str());
        builder.push("\"::text FROM ");
        builder.push(collection.table());
        builder.push(" WHERE \"");
        builder.push(field.as_str());
        builder.push("\"");
        builder
    }

    fn exclude(builder: &mut QueryBuilder<'_, Postgres>, exclude: Option<ListingId>) {
        if let Some(id) = exclude {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(id));
        }
    }
}

#[async_trait]
impl SlugStore for PostgresSlugStore {
    async fn find_slug(
        &self,
        collection: Collection,
        field: &SlugField,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<Option<String>> {
        let mut builder = Self::select(collection, field);
        builder.push(" = ");
        builder.push_bind(slug.to_string());
        Self::exclude(&mut builder, exclude);
        builder.push(" LIMIT 1");

        builder
            .build_query_scalar::<String>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_slugs_matching(
        &self,
        collection: Collection,
        field: &SlugField,
        pattern: &SlugPattern,
        exclude: Option<ListingId>,
    ) -> DomainResult<Vec<String>> {
        let mut builder = Self::select(collection, field);
        builder.push(" ~* ");
        builder.push_bind(pattern.posix());
        Self::exclude(&mut builder, exclude);

        let candidates = builder
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        // The server-side match is a prefilter; suffix parsing uses the same pattern
        // in process.
        Ok(candidates
            .into_iter()
            .filter(|candidate| pattern.is_match(candidate))
            .collect())
    }
}
