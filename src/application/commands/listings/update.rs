// src/application/commands/listings/update.rs
use super::ListingCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ListingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        listing::{
            Collection, Listing, ListingId, ListingSummary, ListingTitle, ListingUpdate,
            specifications::{CanModifyListingSpec, ListingSpecification},
        },
        slug::{SlugRequest, SlugTarget},
    },
};

pub struct UpdateListingCommand {
    pub collection: Collection,
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Regenerate the slug when the title changes. Slugs are stable otherwise.
    pub reslug: bool,
}

impl ListingCommandService {
    pub async fn update_listing(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateListingCommand,
    ) -> ApplicationResult<ListingDto> {
        let UpdateListingCommand {
            collection,
            id,
            title,
            summary,
            reslug,
        } = command;
        let id = ListingId::new(id)?;
        let listing = self
            .read_repo
            .find_by_id(collection, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{collection} {id} not found")))?;

        if !CanModifyListingSpec::update(&actor.capabilities, &listing, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update listing",
            ));
        }

        let title = title.map(ListingTitle::new).transpose()?;
        let summary = summary.map(ListingSummary::new).transpose()?;
        let title_changed = title.as_ref().is_some_and(|t| *t != listing.title);

        let mut attempt = 0;
        loop {
            attempt += 1;
            let update = self
                .build_update(&listing, title.clone(), summary.clone(), reslug && title_changed)
                .await?;
            if update.is_empty() {
                return Ok(listing.into());
            }
            let renamed = update.slug.is_some();

            match self.write_repo.update(update).await {
                Ok(updated) => {
                    tracing::info!(
                        collection = %collection,
                        id = %updated.id,
                        slug = %updated.slug,
                        renamed,
                        "listing updated"
                    );
                    return Ok(updated.into());
                }
                Err(err) if renamed && self.should_retry(collection, attempt, &err) => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn build_update(
        &self,
        listing: &Listing,
        title: Option<ListingTitle>,
        summary: Option<ListingSummary>,
        regenerate_slug: bool,
    ) -> ApplicationResult<ListingUpdate> {
        let mut update = ListingUpdate::new(listing.collection, listing.id, listing.updated_at);

        if let Some(title) = title {
            if regenerate_slug {
                let slug = self
                    .slug_service
                    .generate_unique_slug(
                        SlugRequest::new(listing.collection, title.as_str())
                            .with_target(SlugTarget::Update(listing.id)),
                    )
                    .await?;
                if slug != listing.slug {
                    update = update.with_slug(slug);
                }
            }
            if title != listing.title {
                update = update.with_title(title);
            }
        }
        if let Some(summary) = summary {
            if summary != listing.summary {
                update = update.with_summary(summary);
            }
        }

        if !update.is_empty() {
            update.set_updated_at(self.clock.now());
        }
        Ok(update)
    }
}
