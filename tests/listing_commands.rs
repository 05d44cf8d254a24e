// tests/listing_commands.rs
use campus_core::application::{
    commands::listings::{CreateListingCommand, DeleteListingCommand, UpdateListingCommand},
    commands::relations::{ChangeRelationCommand, ListingRef, RelationOp},
    error::ApplicationError,
    queries::listings::{GetListingBySlugQuery, ListListingsQuery, PreviewSlugQuery},
};
use campus_core::domain::{listing::Collection, relation::RelationKind};
use std::sync::Arc;

mod support;

use support::{InMemoryCatalog, admin_user, build_services, member_user, other_member_user};

fn create(collection: Collection, title: &str) -> CreateListingCommand {
    CreateListingCommand::builder(collection)
        .title(title)
        .build()
        .expect("title set")
}

fn setup() -> (Arc<InMemoryCatalog>, campus_core::application::services::ApplicationServices) {
    let catalog = Arc::new(InMemoryCatalog::new());
    let services = build_services(catalog.clone(), support::DEFAULT_SLUG_ATTEMPTS);
    (catalog, services)
}

#[tokio::test]
async fn create_derives_slug_from_title() {
    let (_, services) = setup();
    let listing = services
        .listing_commands
        .create_listing(&member_user(), create(Collection::Courses, "Intro to Rust"))
        .await
        .unwrap();

    assert_eq!(listing.slug, "intro-to-rust");
    assert_eq!(listing.collection, "courses");
    assert_eq!(listing.owner_id, 2);
    assert_eq!(listing.summary, "");
}

#[tokio::test]
async fn same_title_in_any_case_gets_next_suffix() {
    let (_, services) = setup();
    let user = member_user();
    let cmds = &services.listing_commands;

    let first = cmds.create_listing(&user, create(Collection::Products, "My Book")).await.unwrap();
    let second = cmds.create_listing(&user, create(Collection::Products, "MY BOOK")).await.unwrap();
    let third = cmds.create_listing(&user, create(Collection::Products, "my book")).await.unwrap();

    assert_eq!(first.slug, "my-book");
    assert_eq!(second.slug, "my-book-1");
    assert_eq!(third.slug, "my-book-2");
}

#[tokio::test]
async fn suffix_continues_above_the_maximum_and_skips_gaps() {
    let (_, services) = setup();
    let user = admin_user();
    let cmds = &services.listing_commands;

    for _ in 0..4 {
        cmds.create_listing(&user, create(Collection::Tours, "My Book")).await.unwrap();
    }
    // my-book, my-book-1, my-book-2, my-book-3; drop my-book-2 to leave a gap.
    let gap = services
        .listing_queries
        .get_listing_by_slug(GetListingBySlugQuery {
            collection: Collection::Tours,
            slug: "my-book-2".into(),
        })
        .await
        .unwrap();
    cmds.delete_listing(
        &user,
        DeleteListingCommand {
            collection: Collection::Tours,
            id: gap.id,
        },
    )
    .await
    .unwrap();

    let next = cmds.create_listing(&user, create(Collection::Tours, "My Book")).await.unwrap();
    assert_eq!(next.slug, "my-book-4");
}

#[tokio::test]
async fn slugs_are_scoped_to_their_collection() {
    let (_, services) = setup();
    let user = member_user();
    let cmds = &services.listing_commands;

    let team = cmds.create_listing(&user, create(Collection::Teams, "Robotics")).await.unwrap();
    let tour = cmds.create_listing(&user, create(Collection::Tours, "Robotics")).await.unwrap();

    assert_eq!(team.slug, "robotics");
    assert_eq!(tour.slug, "robotics");
}

#[tokio::test]
async fn non_latin_title_falls_back_to_untitled() {
    let (_, services) = setup();
    let listing = services
        .listing_commands
        .create_listing(&member_user(), create(Collection::Courses, "বই প্রেম"))
        .await
        .unwrap();

    assert_eq!(listing.slug, "untitled-1704067200000");
    assert_eq!(listing.title, "বই প্রেম");
}

#[tokio::test]
async fn blank_title_is_rejected_on_create() {
    let (catalog, services) = setup();
    let err = services
        .listing_commands
        .create_listing(&member_user(), create(Collection::Courses, "   "))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
    assert_eq!(catalog.slug_lookups(), 0);
}

#[tokio::test]
async fn lost_slug_race_is_retried_with_a_fresh_slug() {
    let (catalog, services) = setup();
    catalog.lose_next_inserts(1);

    let listing = services
        .listing_commands
        .create_listing(&member_user(), create(Collection::Products, "Desk Lamp"))
        .await
        .unwrap();

    // The concurrent writer kept "desk-lamp"; the retry saw it and moved on.
    assert_eq!(listing.slug, "desk-lamp-1");
    let mut slugs = catalog.slugs(Collection::Products);
    slugs.sort();
    assert_eq!(slugs, vec!["desk-lamp", "desk-lamp-1"]);
}

#[tokio::test]
async fn slug_race_exhaustion_is_a_conflict() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let services = build_services(catalog.clone(), 2);
    catalog.lose_next_inserts(5);

    let err = services
        .listing_commands
        .create_listing(&member_user(), create(Collection::Products, "Desk Lamp"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");
    // Two attempts, two racing rows.
    assert_eq!(catalog.slugs(Collection::Products).len(), 2);
}

#[tokio::test]
async fn rename_with_reslug_regenerates_excluding_itself() {
    let (_, services) = setup();
    let user = member_user();
    let cmds = &services.listing_commands;
    let listing = cmds.create_listing(&user, create(Collection::Courses, "My Book")).await.unwrap();

    // Same base after normalisation: the listing's own slug is not a collision.
    let same = cmds
        .update_listing(
            &user,
            UpdateListingCommand {
                collection: Collection::Courses,
                id: listing.id,
                title: Some("My Book!".into()),
                summary: None,
                reslug: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(same.slug, "my-book");
    assert_eq!(same.title, "My Book!");

    let renamed = cmds
        .update_listing(
            &user,
            UpdateListingCommand {
                collection: Collection::Courses,
                id: listing.id,
                title: Some("Rust Ownership".into()),
                summary: None,
                reslug: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "rust-ownership");
}

#[tokio::test]
async fn rename_without_reslug_keeps_the_slug() {
    let (_, services) = setup();
    let user = member_user();
    let cmds = &services.listing_commands;
    let listing = cmds.create_listing(&user, create(Collection::Teams, "Chess Club")).await.unwrap();

    let updated = cmds
        .update_listing(
            &user,
            UpdateListingCommand {
                collection: Collection::Teams,
                id: listing.id,
                title: Some("Go Club".into()),
                summary: Some("Board games on Fridays".into()),
                reslug: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "chess-club");
    assert_eq!(updated.title, "Go Club");
    assert_eq!(updated.summary, "Board games on Fridays");
}

#[tokio::test]
async fn members_cannot_edit_or_delete_other_listings() {
    let (_, services) = setup();
    let cmds = &services.listing_commands;
    let listing = cmds
        .create_listing(&member_user(), create(Collection::Products, "Bike"))
        .await
        .unwrap();

    let err = cmds
        .update_listing(
            &other_member_user(),
            UpdateListingCommand {
                collection: Collection::Products,
                id: listing.id,
                title: Some("Stolen Bike".into()),
                summary: None,
                reslug: true,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");

    let err = cmds
        .delete_listing(
            &other_member_user(),
            DeleteListingCommand {
                collection: Collection::Products,
                id: listing.id,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");

    // Admins may edit anything.
    cmds.delete_listing(
        &admin_user(),
        DeleteListingCommand {
            collection: Collection::Products,
            id: listing.id,
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn delete_removes_the_listing_relations() {
    let (catalog, services) = setup();
    let owner = member_user();
    let listing = services
        .listing_commands
        .create_listing(&owner, create(Collection::Teams, "Debate"))
        .await
        .unwrap();

    for user in [member_user(), other_member_user()] {
        services
            .relation_commands
            .change_relation(
                &user,
                ChangeRelationCommand {
                    collection: Collection::Teams,
                    listing: ListingRef::Id(listing.id),
                    kind: RelationKind::Member,
                    op: RelationOp::Set,
                },
            )
            .await
            .unwrap();
    }
    assert_eq!(catalog.relation_rows(), 2);

    services
        .listing_commands
        .delete_listing(
            &owner,
            DeleteListingCommand {
                collection: Collection::Teams,
                id: listing.id,
            },
        )
        .await
        .unwrap();
    assert_eq!(catalog.relation_rows(), 0);
}

#[tokio::test]
async fn preview_matches_what_create_would_produce() {
    let (_, services) = setup();
    let user = member_user();
    services
        .listing_commands
        .create_listing(&user, create(Collection::Courses, "Café Culture"))
        .await
        .unwrap();

    let preview = services
        .listing_queries
        .preview_slug(PreviewSlugQuery {
            collection: Collection::Courses,
            title: "CAFE culture".into(),
            current_id: None,
        })
        .await
        .unwrap();
    assert_eq!(preview.slug, "cafe-culture-1");

    let blank = services
        .listing_queries
        .preview_slug(PreviewSlugQuery {
            collection: Collection::Courses,
            title: "   ".into(),
            current_id: None,
        })
        .await
        .unwrap();
    assert_eq!(blank.slug, "untitled-1704067200000");
}

#[tokio::test]
async fn list_pages_through_a_collection() {
    let (_, services) = setup();
    let user = member_user();
    for title in ["One", "Two", "Three"] {
        services
            .listing_commands
            .create_listing(&user, create(Collection::Tours, title))
            .await
            .unwrap();
    }

    let first = services
        .listing_queries
        .list_listings(ListListingsQuery {
            collection: Collection::Tours,
            limit: 2,
            offset: 0,
        })
        .await
        .unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.next_offset, Some(2));
    // Same timestamp from the fixed clock, so newest id first.
    assert_eq!(first.items[0].slug, "three");

    let second = services
        .listing_queries
        .list_listings(ListListingsQuery {
            collection: Collection::Tours,
            limit: 2,
            offset: 2,
        })
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.next_offset, None);
}
