// Host-side tests for catalog loading and lookup.

use folio_core::catalog::split_tags;
use folio_core::{Catalog, CatalogError};

const SHIPPED: &str = include_str!("../data/catalog.json");

#[test]
fn shipped_catalog_parses() {
    let catalog = Catalog::from_json(SHIPPED).unwrap();
    assert_eq!(catalog.len(), 5);
    let ids: Vec<u32> = catalog.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let first = catalog.by_id(1).unwrap();
    assert_eq!(first.category, "websites");
    assert_eq!(first.technologies, vec!["HTML", "CSS", "JavaScript"]);
    assert!(first.live_demo_url.is_some());
    assert!(catalog.by_id(2).unwrap().live_demo_url.is_none());
}

#[test]
fn items_are_sorted_by_id_on_load() {
    let json = r#"[
        {"id": 9, "title": "b", "description": "", "category": "icons",
         "thumbnail": "t9", "image": "i9"},
        {"id": 2, "title": "a", "description": "", "category": "websites",
         "thumbnail": "t2", "image": "i2"}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.get(0).map(|i| i.id), Some(2));
    assert_eq!(catalog.index_of(9), Some(1));
    assert_eq!(catalog.index_of(5), None);
}

#[test]
fn alternate_field_names_are_accepted() {
    let json = r#"[{
        "id": 1, "title": "t", "description": "d", "category": "websites",
        "thumbnailRef": "thumb.webp", "fullImageRef": "full.webp",
        "viewLive": "https://example.org", "technologyTags": ["Rust", " wasm "]
    }]"#;
    let catalog = Catalog::from_json(json).unwrap();
    let item = catalog.by_id(1).unwrap();
    assert_eq!(item.thumbnail, "thumb.webp");
    assert_eq!(item.image, "full.webp");
    assert_eq!(item.live_demo_url.as_deref(), Some("https://example.org"));
    assert_eq!(item.technologies, vec!["Rust", "wasm"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
        {"id": 1, "title": "a", "description": "", "category": "x", "thumbnail": "", "image": ""},
        {"id": 1, "title": "b", "description": "", "category": "x", "thumbnail": "", "image": ""}
    ]"#;
    assert!(matches!(
        Catalog::from_json(json),
        Err(CatalogError::DuplicateId(1))
    ));
}

#[test]
fn malformed_json_is_an_error() {
    let err = Catalog::from_json("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
    assert!(err.to_string().starts_with("catalog json"));
}

#[test]
fn filter_and_categories() {
    let catalog = Catalog::from_json(SHIPPED).unwrap();
    assert_eq!(catalog.filter("all").len(), 5);
    assert_eq!(catalog.filter("backgrounds"), vec![1, 3, 4]);
    assert_eq!(catalog.filter("icons"), vec![2]);
    assert!(catalog.filter("games").is_empty());
    assert_eq!(
        catalog.categories(),
        vec!["websites", "backgrounds", "icons"]
    );
}

#[test]
fn circular_neighbours() {
    let catalog = Catalog::from_json(SHIPPED).unwrap();
    assert_eq!(catalog.next_index(4), 0);
    assert_eq!(catalog.prev_index(0), 4);
    assert_eq!(catalog.next_index(1), 2);

    let empty = Catalog::default();
    assert_eq!(empty.next_index(0), 0);
    assert_eq!(empty.prev_index(0), 0);
}

#[test]
fn split_tags_trims_and_drops_empties() {
    assert_eq!(split_tags("HTML, CSS ,, JS"), vec!["HTML", "CSS", "JS"]);
    assert!(split_tags("").is_empty());
}
