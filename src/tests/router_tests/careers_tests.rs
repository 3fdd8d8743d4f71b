use crate::router::handle;
use crate::tests::utils::{
    body_string, build, get, post_form, test_app, FakeLeads, FakeListings, FakeRelay,
};

const APPLICATION: &str = "name=Dana+Agent&email=Dana%40Example.com&phone=%28561%29+555-0142\
    &license_status=pending&experience=0&interest=commercial\
    &why_chosen=Mentorship&about=Career+changer&faith_aligned=on";

#[test]
fn careers_page_renders() {
    let t = test_app(FakeListings::returning(vec![]));

    let resp = handle(get("/careers"), &t.app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Join the Chosen Team"));
    assert!(body.contains(r#"id="careers-form""#));
}

#[test]
fn incomplete_application_is_not_relayed() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(
        handle(post_form("/careers", "name=Dana&email=dana%40example.com", true), &t.app).unwrap(),
    );

    assert!(body.contains("Phone is required"));
    assert!(body.contains("Please select your license status"));
    assert!(body.contains("Please confirm you are aligned"));
    assert!(body.contains(r#"value="Dana""#));
    assert!(t.relay.seen.lock().unwrap().is_empty());
}

#[test]
fn application_is_relayed_and_form_reset() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(handle(post_form("/careers", APPLICATION, true), &t.app).unwrap());

    assert!(body.contains("Application Submitted!"));
    assert!(!body.contains("Dana Agent"));
    assert!(!body.contains("<!DOCTYPE html>"));

    let seen = t.relay.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["subject"], "Career Application");
    assert_eq!(seen[0]["licenseStatus"], "pending");
    assert_eq!(seen[0]["experience"], "0");
    assert_eq!(seen[0]["interest"], "commercial");
    assert_eq!(seen[0]["faithAligned"], true);
}

#[test]
fn relay_failure_keeps_application() {
    let t = build(
        FakeListings::returning(vec![]),
        FakeLeads::default(),
        FakeRelay {
            fail: true,
            ..Default::default()
        },
    );

    let body = body_string(handle(post_form("/careers", APPLICATION, false), &t.app).unwrap());

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Failed to submit application. Please try again."));
    assert!(body.contains(r#"value="Dana Agent""#));
}
