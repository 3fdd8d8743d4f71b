use crate::router::handle;
use crate::tests::utils::{
    body_string, build, get, post_form, test_app, FakeLeads, FakeListings, FakeRelay,
};

const PRAYER: &str = "name=Ruth&email=ruth%40example.com&request_type=business\
    &request=Wisdom+on+the+Lake+Worth+deal&confidential=on";

#[test]
fn faith_community_page_renders() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(handle(get("/faith-community"), &t.app).unwrap());
    assert!(body.contains("Faith in the Marketplace"));
    assert!(body.contains(r#"id="prayer-form""#));
}

#[test]
fn empty_request_is_not_relayed() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(
        handle(
            post_form("/faith-community", "name=Ruth&email=ruth%40example.com", true),
            &t.app,
        )
        .unwrap(),
    );

    assert!(body.contains("Please share your prayer request"));
    assert!(t.relay.seen.lock().unwrap().is_empty());
}

#[test]
fn prayer_request_is_relayed() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(handle(post_form("/faith-community", PRAYER, true), &t.app).unwrap());

    assert!(body.contains("Prayer Request Received"));

    let seen = t.relay.seen.lock().unwrap();
    assert_eq!(seen[0]["subject"], "Prayer Request");
    assert_eq!(seen[0]["requestType"], "business");
    assert_eq!(seen[0]["confidential"], true);
}

#[test]
fn relay_failure_keeps_request() {
    let t = build(
        FakeListings::returning(vec![]),
        FakeLeads::default(),
        FakeRelay {
            fail: true,
            ..Default::default()
        },
    );

    let body = body_string(handle(post_form("/faith-community", PRAYER, true), &t.app).unwrap());

    assert!(body.contains("Failed to submit prayer request. Please try again."));
    assert!(body.contains("Wisdom on the Lake Worth deal"));
}
