use crate::router::handle;
use crate::tests::utils::{
    body_string, build, get, post_form, test_app, FakeLeads, FakeListings, FakeRelay,
};

const VALID: &str = "name=Sam+Investor&email=Sam%40Example.com&phone=561-555-0199\
    &interests=residential&interests=land&budget=%24500K+-+%242M&source=referral\
    &nda_acknowledged=on";

#[test]
fn off_market_page_renders() {
    let t = test_app(FakeListings::returning(vec![]));

    let resp = handle(get("/off-market"), &t.app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Off-Market Access"));
    assert!(body.contains(r#"id="off-market-form""#));
}

#[test]
fn invalid_request_is_not_relayed() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(
        handle(post_form("/off-market", "name=&email=bad", true), &t.app).unwrap(),
    );

    assert!(body.contains("Name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Phone is required"));
    assert!(body.contains("Please acknowledge the confidentiality terms"));
    assert!(t.relay.seen.lock().unwrap().is_empty());
}

#[test]
fn valid_request_is_relayed_and_form_cleared() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(handle(post_form("/off-market", VALID, true), &t.app).unwrap());

    assert!(body.contains("Request Submitted"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("Sam Investor"));

    let seen = t.relay.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["interests"], "residential, land");
    assert_eq!(seen[0]["email"], "sam@example.com");
    assert_eq!(seen[0]["source"], "referral");
    assert_eq!(seen[0]["subject"], "Off-Market Access Request");
}

#[test]
fn relay_failure_keeps_input() {
    let t = build(
        FakeListings::returning(vec![]),
        FakeLeads::default(),
        FakeRelay {
            fail: true,
            ..Default::default()
        },
    );

    let body = body_string(handle(post_form("/off-market", VALID, false), &t.app).unwrap());

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Failed to submit request"));
    assert!(body.contains(r#"value="Sam Investor""#));
}
