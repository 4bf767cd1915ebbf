use std::collections::HashMap;

use client_paths::{HostDocument, PathError, Paths};

fn attributes(data: &str) -> HashMap<String, String> {
    [
        ("data-data-path", data),
        ("data-tileset-path", "/static/tiles"),
        ("data-ws", "/ws"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

// The registry is process-wide, so the whole lifecycle runs in one test.
#[test]
fn registry_resolves_once_and_keeps_its_values() {
    assert!(matches!(Paths::get(), Err(PathError::Uninitialized)));

    // A failed init leaves the registry empty.
    let err = Paths::init(&attributes("javascript:alert(1)")).unwrap_err();
    assert_eq!(err.attribute(), Some("data-data-path"));
    assert!(!Paths::is_initialized());

    let doc = HostDocument::parse(
        r#"<!DOCTYPE html>
        <html data-data-path="/static/data" data-tileset-path="/static/tiles" data-ws="/ws">
        </html>"#,
    );
    let first = Paths::init(&doc).unwrap();
    assert_eq!(first.sounds(), "/static/data/sounds");
    assert_eq!(first.achievements(), "/static/data/sprites/achievements");

    // Later sources are ignored, valid or not.
    let second = Paths::init(&attributes("/elsewhere")).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.data(), "/static/data");

    let third = Paths::init(&HashMap::<String, String>::new()).unwrap();
    assert_eq!(third, first);

    assert_eq!(Paths::get().unwrap().tileset(), "/static/tiles");
}
