// src/domain/listing/specifications.rs
use std::collections::HashSet;

use crate::domain::listing::entity::Listing;
use crate::domain::user::{Capability, UserId};

pub trait ListingSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Owner with the `:own` capability, or anyone with the `:any` capability.
pub struct CanModifyListingSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    listing: &'a Listing,
    user_id: UserId,
    verb: &'static str,
}

impl<'a> CanModifyListingSpec<'a> {
    pub fn update(
        capabilities: &'a HashSet<Capability>,
        listing: &'a Listing,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            listing,
            user_id,
            verb: "update",
        }
    }

    pub fn delete(
        capabilities: &'a HashSet<Capability>,
        listing: &'a Listing,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            listing,
            user_id,
            verb: "delete",
        }
    }

    fn has_capability(&self, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches("listings", action))
    }
}

impl ListingSpecification for CanModifyListingSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.has_capability(&format!("{}:any", self.verb))
            || (self.has_capability(&format!("{}:own", self.verb))
                && self.listing.is_owned_by(self.user_id))
    }
}
