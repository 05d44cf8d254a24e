// src/application/commands/relations/change.rs
use super::RelationCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, RelationStateDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        listing::{Collection, ListingId},
        relation::{RelationKey, RelationKind},
        slug::Slug,
    },
};

/// How the caller addressed the listing. Both forms end up on the same write path.
#[derive(Debug, Clone)]
pub enum ListingRef {
    Id(i64),
    Slug(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationOp {
    Toggle,
    Set,
    Unset,
}

pub struct ChangeRelationCommand {
    pub collection: Collection,
    pub listing: ListingRef,
    pub kind: RelationKind,
    pub op: RelationOp,
}

impl RelationCommandService {
    pub async fn change_relation(
        &self,
        actor: &AuthenticatedUser,
        command: ChangeRelationCommand,
    ) -> ApplicationResult<RelationStateDto> {
        let ChangeRelationCommand {
            collection,
            listing,
            kind,
            op,
        } = command;
        ensure_capability(actor, "relations", kind.required_action())?;

        let listing_id = self.resolve_listing(collection, listing).await?;
        let key = RelationKey {
            collection,
            listing_id,
            kind,
            user_id: actor.id,
        };

        let state = match op {
            RelationOp::Toggle => self.relation_repo.toggle(key, self.clock.now()).await?,
            RelationOp::Set => self.relation_repo.set(key, self.clock.now()).await?,
            RelationOp::Unset => self.relation_repo.unset(key).await?,
        };

        tracing::info!(
            collection = %collection,
            listing = %listing_id,
            kind = %kind,
            user = %actor.id,
            op = ?op,
            active = state.active,
            changed = state.changed,
            "relation changed"
        );

        Ok(RelationStateDto::from_parts(&key, state))
    }

    async fn resolve_listing(
        &self,
        collection: Collection,
        listing: ListingRef,
    ) -> ApplicationResult<ListingId> {
        let found = match listing {
            ListingRef::Id(raw) => {
                let id = ListingId::new(raw)?;
                self.listing_repo.find_by_id(collection, id).await?
            }
            ListingRef::Slug(raw) => match Slug::from_path(&raw) {
                Ok(slug) => self.listing_repo.find_by_slug(collection, &slug).await?,
                Err(_) => None,
            },
        };

        found
            .map(|listing| listing.id)
            .ok_or_else(|| ApplicationError::not_found(format!("{collection} listing not found")))
    }
}
