use crate::domain::search::SEARCH_FALLBACK_ERROR;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, htmx_get, listing, post_form, test_app, FakeListings};
use scraper::{Html, Selector};

fn card_ids(body: &str) -> Vec<String> {
    let doc = Html::parse_fragment(body);
    let sel = Selector::parse("article.property-card").unwrap();
    doc.select(&sel)
        .map(|card| card.value().attr("data-listing-id").unwrap().to_string())
        .collect()
}

#[test]
fn properties_page_starts_unsearched() {
    let t = test_app(FakeListings::returning(vec![]));

    let resp = handle(get("/properties"), &t.app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Start Your Property Search"));
    assert!(body.contains("Save Search &amp; Get Alerts"));
    assert!(t.listings.seen.lock().unwrap().is_empty(), "no search before asked");
}

#[test]
fn loading_state_swaps_into_listings_on_request() {
    let t = test_app(FakeListings::http_error(500, r#"{"error":"MLS timeout"}"#));

    let body = body_string(handle(get("/properties?search=1"), &t.app).unwrap());

    // the spinner lives in an inert template, not beside the error panel
    assert!(body.contains(r#"<template id="listings-loading">"#));
    assert!(body.contains("htmx:beforeRequest"));
    assert!(body.contains("target.innerHTML = loading.innerHTML"));

    let doc = Html::parse_document(&body);
    let error = Selector::parse("#listings .listings-error").unwrap();
    let spinner = Selector::parse("#listings .listings-loading").unwrap();
    assert_eq!(doc.select(&error).count(), 1);
    assert_eq!(doc.select(&spinner).count(), 0);
}

#[test]
fn blank_error_field_still_shows_listings() {
    let t = test_app(FakeListings::with_error_field(
        vec![listing("a", "9 Harbor Rd", 875_000.0)],
        "",
    ));

    let body = body_string(handle(htmx_get("/properties/listings"), &t.app).unwrap());
    assert!(body.contains("Showing 1 properties"));
    assert!(!body.contains("Unable to Load Listings"));
}

#[test]
fn search_shows_listings_in_received_order() {
    let t = test_app(FakeListings::returning(vec![
        listing("c", "300 Ocean Dr", 1_450_000.0),
        listing("a", "12 Inlet Way", 525_000.0),
        listing("b", "77 Loxahatchee Rd", 980_000.0),
    ]));

    let req = htmx_get(
        "/properties/listings?county=Palm+Beach&city=Jupiter&min_price=500%2C000&max_price=1500000",
    );
    let resp = handle(req, &t.app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing 3 properties"));
    assert_eq!(card_ids(&body), ["c", "a", "b"]);
    assert!(body.contains("$1,450,000"));
    assert!(body.contains("Jupiter, FL 33458"));
    assert!(!body.contains("<!DOCTYPE html>"), "grid is a fragment");

    let seen = t.listings.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].city.as_deref(), Some("Jupiter"));
    assert_eq!(seen[0].min_price, Some(500_000));
    assert_eq!(seen[0].max_price, Some(1_500_000));
    assert_eq!(seen[0].limit, 24);

    // county stays on the page; it is not part of the listing request
    let sent = serde_json::to_value(&seen[0]).unwrap();
    assert!(sent.get("county").is_none());
}

#[test]
fn empty_result_is_not_an_error() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(handle(htmx_get("/properties/listings"), &t.app).unwrap());
    assert!(body.contains("No Properties Found"));
    assert!(!body.contains("Unable to Load Listings"));
}

#[test]
fn structured_error_is_shown_verbatim() {
    let t = test_app(FakeListings::http_error(500, r#"{"error":"MLS timeout"}"#));

    let body = body_string(handle(htmx_get("/properties/listings"), &t.app).unwrap());
    assert!(body.contains("Unable to Load Listings"));
    assert!(body.contains("MLS timeout"));
    assert!(!body.contains(SEARCH_FALLBACK_ERROR));
}

#[test]
fn unstructured_error_uses_fallback() {
    let t = test_app(FakeListings::http_error(502, "<html>Bad Gateway</html>"));

    let body = body_string(handle(htmx_get("/properties/listings"), &t.app).unwrap());
    assert!(body.contains(SEARCH_FALLBACK_ERROR));
}

#[test]
fn application_error_in_success_response() {
    let t = test_app(FakeListings::app_error("Search temporarily unavailable"));

    let body = body_string(handle(htmx_get("/properties/listings"), &t.app).unwrap());
    assert!(body.contains("Search temporarily unavailable"));
    assert!(card_ids(&body).is_empty());
}

#[test]
fn plain_form_submit_renders_results_inline() {
    let t = test_app(FakeListings::returning(vec![listing("x", "1 Palm Way", 700_000.0)]));

    let resp = handle(get("/properties?search=1&city=Jupiter&bedrooms=3"), &t.app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Showing 1 properties"));
    assert_eq!(t.listings.seen.lock().unwrap()[0].bedrooms, Some(3));

    // the chosen filters are reflected back into the form
    let doc = Html::parse_document(&body);
    let selected = Selector::parse("#bedrooms option[selected]").unwrap();
    let chosen: Vec<_> = doc
        .select(&selected)
        .map(|o| o.value().attr("value").unwrap().to_string())
        .collect();
    assert_eq!(chosen, ["3"]);
}

#[test]
fn card_without_media_uses_placeholder() {
    let mut bare = listing("p", "5 Dune Ct", 410_000.0);
    bare.media.clear();
    bare.sqft = None;
    let t = test_app(FakeListings::returning(vec![bare]));

    let body = body_string(handle(htmx_get("/properties/listings"), &t.app).unwrap());
    let doc = Html::parse_fragment(&body);
    let img = Selector::parse("article.property-card img").unwrap();
    let img = doc.select(&img).next().expect("card image");

    assert_eq!(img.value().attr("src"), Some("/placeholder.svg"));
    assert!(img.value().attr("onerror").unwrap().contains("/placeholder.svg"));
    assert!(!body.contains("SqFt"));
}

#[test]
fn cities_follow_selected_county() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(handle(htmx_get("/properties/cities?county=Broward"), &t.app).unwrap());
    assert!(body.contains("Weston"));
    assert!(!body.contains("Jupiter"));

    let doc = Html::parse_fragment(&body);
    let selected = Selector::parse("option[selected]").unwrap();
    let selected: Vec<_> = doc.select(&selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].value().attr("value"), Some("all"));
}

#[test]
fn all_counties_lists_every_city() {
    let t = test_app(FakeListings::returning(vec![]));

    let body = body_string(handle(htmx_get("/properties/cities?county=all"), &t.app).unwrap());
    assert!(body.contains("Weston"));
    assert!(body.contains("Jupiter"));
    assert!(body.contains("Doral"));
}

#[test]
fn placeholder_is_served_as_svg() {
    let t = test_app(FakeListings::returning(vec![]));

    let resp = handle(get("/placeholder.svg"), &t.app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "image/svg+xml"
    );
}

#[test]
fn unknown_path_is_not_found() {
    let t = test_app(FakeListings::returning(vec![]));
    assert!(matches!(
        handle(get("/nope"), &t.app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn wrong_method_on_known_path() {
    let t = test_app(FakeListings::returning(vec![]));
    assert!(matches!(
        handle(post_form("/properties", "", false), &t.app),
        Err(ServerError::MethodNotAllowed)
    ));
}
