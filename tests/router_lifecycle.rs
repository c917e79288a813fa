use http_rule_router::{Router, RouterError, RouterResult, TemplateError, TreeError};

fn expect_error<T: std::fmt::Debug>(result: RouterResult<T>) -> RouterError {
    result.expect_err("expected error")
}

#[test]
fn router_when_sealed_then_finds_routes() {
    let router = Router::new(None);
    router
        .add("GET", "/v1/shelves/{shelf}/books/{book}", "get_book")
        .expect("route should register");
    router.seal();

    let found = router
        .find("GET", "/v1/shelves/s1/books/b2")
        .expect("route should match");
    assert_eq!(found.operation, "get_book");
    assert_eq!(found.get("shelf"), Some("s1"));
    assert_eq!(found.get("book"), Some("b2"));
}

#[test]
fn router_when_find_called_before_seal_then_returns_error() {
    let router = Router::new(None);
    router
        .add("GET", "/pending", "pending")
        .expect("route should register");

    match expect_error(router.find("GET", "/pending")) {
        RouterError::FindWhileMutable => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_add_called_after_seal_then_returns_error() {
    let router = Router::new(None);
    router
        .add("GET", "/once", "once")
        .expect("initial add should succeed");
    router.seal();
    assert!(router.is_sealed());

    match expect_error(router.add("GET", "/twice", "twice")) {
        RouterError::AddWhileSealed { template } => assert_eq!(template, "/twice"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_bulk_add_called_after_seal_then_reports_count() {
    let router = Router::new(None);
    router.seal();

    let entries = vec![("GET", "/a", "a"), ("GET", "/b", "b")];
    match expect_error(router.add_bulk(entries)) {
        RouterError::BulkAddWhileSealed { count } => assert_eq!(count, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_get_readonly_called_before_seal_then_returns_error() {
    let router = Router::new(None);

    match expect_error(router.get_readonly()) {
        RouterError::ReadOnlyUnavailable => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_sealed_twice_then_keeps_first_snapshot() {
    let router = Router::new(None);
    router.add("GET", "/a", "a").expect("route should register");
    router.seal();
    let first = router.get_readonly().expect("snapshot should exist");
    router.seal();
    let second = router.get_readonly().expect("snapshot should exist");

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 1);
}

#[test]
fn router_bulk_add_registers_in_order() {
    let router = Router::new(None);
    let added = router
        .add_bulk([
            ("GET", "/v1/items/{id}", "get_item"),
            ("POST", "/v1/items", "create_item"),
            ("GET", "/v1/items/{id}", "get_item_v2"),
        ])
        .expect("bulk add should succeed");
    assert_eq!(added, 3);

    let metrics = router.metrics();
    assert_eq!(metrics.total_routes_registered, 3);
    assert_eq!(metrics.targets_replaced, 1);

    router.seal();
    let found = router.find("GET", "/v1/items/9").expect("route should match");
    assert_eq!(found.operation, "get_item_v2");
}

#[test]
fn router_bulk_add_stops_at_first_invalid_template() {
    let router = Router::new(None);
    let err = expect_error(router.add_bulk([
        ("GET", "/ok", "ok"),
        ("GET", "broken", "broken"),
        ("GET", "/never", "never"),
    ]));
    assert!(matches!(
        err,
        RouterError::Tree(TreeError::Template(TemplateError::MissingLeadingSlash { .. }))
    ));

    router.seal();
    assert!(router.find("GET", "/ok").is_ok());
    assert!(router.find("GET", "/never").expect_err("not registered").is_not_found());
}

#[test]
fn router_when_route_missing_then_reports_not_found() {
    let router = Router::new(None);
    router.add("GET", "/a/b", "ab").expect("route should register");
    router.seal();

    let err = expect_error(router.find("GET", "/a/c"));
    assert!(err.is_not_found());
    match err {
        RouterError::Tree(TreeError::SegmentNotMatched { segment, .. }) => {
            assert_eq!(segment, "c")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_readonly_snapshot_matches_without_router() {
    let router = Router::new(None);
    router
        .add("GET", "/v1/{name=messages/*}", "get_message")
        .expect("route should register");
    router.seal();

    let tree = router.get_readonly().expect("snapshot should exist");
    drop(router);

    let found = tree
        .find("GET", "/v1/messages/123")
        .expect("route should match");
    assert_eq!(found.get("name"), Some("messages/123"));
}
