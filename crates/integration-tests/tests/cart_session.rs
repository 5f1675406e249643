//! Full shopping sessions against file-backed storage.
//!
//! Each test models one or more "visits": a [`CartService`] constructed
//! over a cart file, restored, operated on, and dropped. A second service
//! over the same file stands in for a page reload.

use avogrove_cart::storage::JsonFileStorage;
use avogrove_cart::{CartService, catalog};
use avogrove_core::{Price, ProductId};

fn session(path: &std::path::Path) -> CartService<JsonFileStorage> {
    let mut cart = CartService::new(catalog::demo_catalog(), JsonFileStorage::new(path));
    cart.restore();
    cart
}

#[test]
fn test_cart_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    {
        let mut cart = session(&path);
        cart.add_item(ProductId::new(1)).expect("add");
        cart.add_item(ProductId::new(1)).expect("add");
        cart.add_item(ProductId::new(3)).expect("add");
    }

    let cart = session(&path);
    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_price(), Price::new(610));

    let ids: Vec<_> = cart.entries().iter().map(|e| e.id.as_u32()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_first_visit_starts_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cart = session(&dir.path().join("cart.json"));
    assert!(cart.is_empty());
    assert_eq!(cart.total_price(), Price::ZERO);
}

#[test]
fn test_corrupt_cart_file_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");
    std::fs::write(&path, b"]]]not a cart").expect("write");

    let mut cart = session(&path);
    assert!(cart.is_empty());

    // Shopping continues; the next save replaces the corrupt payload.
    cart.add_item(ProductId::new(2)).expect("add");
    let reloaded = session(&path);
    assert_eq!(reloaded.total_item_count(), 1);
}

#[test]
fn test_clear_persists_across_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    {
        let mut cart = session(&path);
        cart.add_item(ProductId::new(1)).expect("add");
        cart.add_item(ProductId::new(2)).expect("add");
        cart.clear().expect("clear");
    }

    let cart = session(&path);
    assert!(cart.is_empty());
}

#[test]
fn test_stored_payload_uses_original_wire_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    let mut cart = session(&path);
    cart.add_item(ProductId::new(1)).expect("add");

    let raw = std::fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse");
    let first = &value.as_array().expect("array")[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["unitPrice"], 80);
    assert_eq!(first["quantity"], 1);
    assert_eq!(first["name"], "台灣在地酪梨");
}

#[test]
fn test_legacy_payload_with_extra_fields_loads() {
    // The browser predecessor persisted whole product objects; those extra
    // fields must not break a load.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");
    std::fs::write(
        &path,
        r#"[{"id":2,"name":"精選大顆酪梨","description":"特選大顆酪梨","details":"產地:嘉義","price":120,"unitPrice":120,"image":"🥑","quantity":3}]"#,
    )
    .expect("write");

    let cart = session(&path);
    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_price(), Price::new(360));
}
