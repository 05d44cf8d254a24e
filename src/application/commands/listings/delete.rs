// src/application/commands/listings/delete.rs
use super::ListingCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::listing::{
        Collection, ListingId,
        specifications::{CanModifyListingSpec, ListingSpecification},
    },
};

pub struct DeleteListingCommand {
    pub collection: Collection,
    pub id: i64,
}

impl ListingCommandService {
    pub async fn delete_listing(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteListingCommand,
    ) -> ApplicationResult<()> {
        let collection = command.collection;
        let id = ListingId::new(command.id)?;
        let listing = self
            .read_repo
            .find_by_id(collection, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{collection} {id} not found")))?;

        if !CanModifyListingSpec::delete(&actor.capabilities, &listing, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete listing",
            ));
        }

        self.write_repo.delete(collection, id).await?;
        tracing::info!(collection = %collection, id = %id, slug = %listing.slug, "listing deleted");
        Ok(())
    }
}
