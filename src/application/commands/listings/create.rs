// src/application/commands/listings/create.rs
use super::ListingCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ListingDto},
        error::ApplicationResult,
    },
    domain::{
        listing::{Collection, ListingSummary, ListingTitle, NewListing},
        slug::SlugRequest,
    },
};

pub struct CreateListingCommand {
    pub collection: Collection,
    pub title: String,
    pub summary: Option<String>,
}

impl CreateListingCommand {
    pub fn builder(collection: Collection) -> CreateListingCommandBuilder {
        CreateListingCommandBuilder {
            collection,
            title: None,
            summary: None,
        }
    }
}

pub struct CreateListingCommandBuilder {
    collection: Collection,
    title: Option<String>,
    summary: Option<String>,
}

impl CreateListingCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn build(self) -> Result<CreateListingCommand, &'static str> {
        Ok(CreateListingCommand {
            collection: self.collection,
            title: self.title.ok_or("title is required")?,
            summary: self.summary,
        })
    }
}

impl ListingCommandService {
    pub async fn create_listing(
        &self,
        actor: &AuthenticatedUser,
        command: CreateListingCommand,
    ) -> ApplicationResult<ListingDto> {
        ensure_capability(actor, "listings", "create")?;

        let CreateListingCommand {
            collection,
            title,
            summary,
        } = command;
        let title = ListingTitle::new(title)?;
        let summary = ListingSummary::new(summary.unwrap_or_default())?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            let slug = self
                .slug_service
                .generate_unique_slug(SlugRequest::new(collection, title.as_str()))
                .await?;
            let now = self.clock.now();

            let new_listing = NewListing {
                collection,
                title: title.clone(),
                slug,
                summary: summary.clone(),
                owner_id: actor.id,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_listing).await {
                Ok(created) => {
                    tracing::info!(
                        collection = %collection,
                        id = %created.id,
                        slug = %created.slug,
                        owner = %actor.id,
                        "listing created"
                    );
                    return Ok(created.into());
                }
                Err(err) if self.should_retry(collection, attempt, &err) => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }
}
