use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, FakeListings};
use scraper::{Html, Selector};

const PAGES: &[&str] = &["/", "/properties", "/off-market", "/careers", "/faith-community"];

#[test]
fn every_internal_link_resolves() {
    let t = test_app(FakeListings::returning(vec![]));
    let anchors = Selector::parse("a[href]").unwrap();

    for page in PAGES {
        let body = body_string(handle(get(page), &t.app).unwrap());
        let doc = Html::parse_document(&body);

        for a in doc.select(&anchors) {
            let href = a.value().attr("href").unwrap();
            if !href.starts_with('/') {
                assert!(
                    href.starts_with("mailto:") || href.starts_with("tel:"),
                    "{page} links off-site to {href}"
                );
                continue;
            }
            assert!(
                handle(get(href), &t.app).is_ok(),
                "{page} links to missing {href}"
            );
        }
    }
}
