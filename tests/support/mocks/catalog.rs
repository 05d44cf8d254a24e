// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use campus_core::domain::{
    errors::{DomainError, DomainResult},
    listing::{
        Collection, Listing, ListingId, ListingReadRepository, ListingUpdate,
        ListingWriteRepository, NewListing,
    },
    relation::{RelationKey, RelationRepository, RelationState},
    slug::{Slug, SlugField, SlugPattern, SlugStore},
    user::UserId,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{
    Mutex,
    atomic::{AtomicU32, Ordering},
};

#[derive(Default)]
struct State {
    listings: Vec<Listing>,
    relations: HashSet<RelationKey>,
    next_id: i64,
}

impl State {
    fn slug_taken(&self, collection: Collection, slug: &Slug, exclude: Option<ListingId>) -> bool {
        self.listings.iter().any(|l| {
            l.collection == collection && l.slug == *slug && Some(l.id) != exclude
        })
    }

    fn listing_exists(&self, collection: Collection, id: ListingId) -> bool {
        self.listings
            .iter()
            .any(|l| l.collection == collection && l.id == id)
    }

    fn relation_count(&self, key: &RelationKey) -> u64 {
        self.relations
            .iter()
            .filter(|r| {
                r.collection == key.collection && r.listing_id == key.listing_id && r.kind == key.kind
            })
            .count() as u64
    }

    fn push(&mut self, new: NewListing) -> Listing {
        self.next_id += 1;
        let listing = Listing {
            id: ListingId::new(self.next_id).expect("ids start at 1"),
            collection: new.collection,
            title: new.title,
            slug: new.slug,
            summary: new.summary,
            owner_id: new.owner_id,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.listings.push(listing.clone());
        listing
    }
}

/// Listings, slugs and relations behind one lock. Holding the lock for a whole
/// call gives the same all-or-nothing behaviour as a single SQL statement.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<State>,
    racing_inserts: AtomicU32,
    slug_lookups: AtomicU32,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `n` inserts lose a race: a concurrent writer stores the same slug
    /// first and the insert is rejected by the unique index.
    pub fn lose_next_inserts(&self, n: u32) {
        self.racing_inserts.store(n, Ordering::SeqCst);
    }

    /// Number of `SlugStore` calls served so far.
    pub fn slug_lookups(&self) -> u32 {
        self.slug_lookups.load(Ordering::SeqCst)
    }

    pub fn relation_rows(&self) -> usize {
        self.state.lock().unwrap().relations.len()
    }

    pub fn slugs(&self, collection: Collection) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .listings
            .iter()
            .filter(|l| l.collection == collection)
            .map(|l| l.slug.as_str().to_string())
            .collect()
    }

    fn take_race(&self) -> bool {
        self.racing_inserts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn check_field(field: &SlugField) -> DomainResult<()> {
        if field.as_str() == "slug" {
            Ok(())
        } else {
            Err(DomainError::Persistence(format!(
                "column \"{}\" does not exist",
                field.as_str()
            )))
        }
    }
}

#[async_trait]
impl ListingWriteRepository for InMemoryCatalog {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing> {
        let mut state = self.state.lock().unwrap();

        if self.take_race() {
            let mut racer = listing.clone();
            racer.owner_id = UserId(999);
            state.push(racer);
            return Err(DomainError::SlugConflict(listing.slug.into_inner()));
        }

        if state.slug_taken(listing.collection, &listing.slug, None) {
            return Err(DomainError::SlugConflict(listing.slug.into_inner()));
        }
        Ok(state.push(listing))
    }

    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing> {
        let mut state = self.state.lock().unwrap();

        if let Some(slug) = &update.slug {
            if state.slug_taken(update.collection, slug, Some(update.id)) {
                return Err(DomainError::SlugConflict(slug.as_str().to_string()));
            }
        }

        let listing = state
            .listings
            .iter_mut()
            .find(|l| l.collection == update.collection && l.id == update.id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {}", update.collection, update.id)))?;

        if listing.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("listing was modified concurrently".into()));
        }

        if let Some(title) = update.title {
            listing.title = title;
        }
        if let Some(slug) = update.slug {
            listing.slug = slug;
        }
        if let Some(summary) = update.summary {
            listing.summary = summary;
        }
        listing.updated_at = update.updated_at;
        Ok(listing.clone())
    }

    async fn delete(&self, collection: Collection, id: ListingId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.listings.len();
        state
            .listings
            .retain(|l| !(l.collection == collection && l.id == id));
        if state.listings.len() == before {
            return Err(DomainError::NotFound(format!("{collection} {id}")));
        }
        state
            .relations
            .retain(|r| !(r.collection == collection && r.listing_id == id));
        Ok(())
    }
}

#[async_trait]
impl ListingReadRepository for InMemoryCatalog {
    async fn find_by_id(
        &self,
        collection: Collection,
        id: ListingId,
    ) -> DomainResult<Option<Listing>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .listings
            .iter()
            .find(|l| l.collection == collection && l.id == id)
            .cloned())
    }

    async fn find_by_slug(
        &self,
        collection: Collection,
        slug: &Slug,
    ) -> DomainResult<Option<Listing>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .listings
            .iter()
            .find(|l| l.collection == collection && l.slug == *slug)
            .cloned())
    }

    async fn list(
        &self,
        collection: Collection,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Listing>> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<Listing> = state
            .listings
            .iter()
            .filter(|l| l.collection == collection)
            .cloned()
            .collect();
        items.sort_by_key(|l| std::cmp::Reverse((l.created_at, i64::from(l.id))));
        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl SlugStore for InMemoryCatalog {
    async fn find_slug(
        &self,
        collection: Collection,
        field: &SlugField,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<Option<String>> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        Self::check_field(field)?;
        let state = self.state.lock().unwrap();
        Ok(state
            .listings
            .iter()
            .filter(|l| l.collection == collection && Some(l.id) != exclude)
            .map(|l| l.slug.as_str())
            .find(|stored| *stored == slug)
            .map(str::to_string))
    }

    async fn find_slugs_matching(
        &self,
        collection: Collection,
        field: &SlugField,
        pattern: &SlugPattern,
        exclude: Option<ListingId>,
    ) -> DomainResult<Vec<String>> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        Self::check_field(field)?;
        let state = self.state.lock().unwrap();
        Ok(state
            .listings
            .iter()
            .filter(|l| l.collection == collection && Some(l.id) != exclude)
            .map(|l| l.slug.as_str())
            .filter(|stored| pattern.is_match(stored))
            .map(str::to_string)
            .collect())
    }
}

#[async_trait]
impl RelationRepository for InMemoryCatalog {
    async fn toggle(&self, key: RelationKey, _now: DateTime<Utc>) -> DomainResult<RelationState> {
        let mut state = self.state.lock().unwrap();
        if state.relations.remove(&key) {
            return Ok(RelationState {
                active: false,
                changed: true,
                count: state.relation_count(&key),
            });
        }
        if !state.listing_exists(key.collection, key.listing_id) {
            return Err(DomainError::NotFound(format!(
                "{} {}",
                key.collection, key.listing_id
            )));
        }
        state.relations.insert(key);
        Ok(RelationState {
            active: true,
            changed: true,
            count: state.relation_count(&key),
        })
    }

    async fn set(&self, key: RelationKey, _now: DateTime<Utc>) -> DomainResult<RelationState> {
        let mut state = self.state.lock().unwrap();
        if !state.listing_exists(key.collection, key.listing_id) {
            return Err(DomainError::NotFound(format!(
                "{} {}",
                key.collection, key.listing_id
            )));
        }
        let changed = state.relations.insert(key);
        Ok(RelationState {
            active: true,
            changed,
            count: state.relation_count(&key),
        })
    }

    async fn unset(&self, key: RelationKey) -> DomainResult<RelationState> {
        let mut state = self.state.lock().unwrap();
        let changed = state.relations.remove(&key);
        Ok(RelationState {
            active: false,
            changed,
            count: state.relation_count(&key),
        })
    }
}
