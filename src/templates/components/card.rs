use maud::{html, Markup};

/// One of the home page division tiles, linking through to its section.
pub fn division_card(title: &str, blurb: &str, href: &str, cta: &str) -> Markup {
    html! {
        div class="card division-card" {
            h2 { (title) }
            div class="card-body" {
                p { (blurb) }
                a href=(href) class="btn btn-outline" { (cta) " →" }
            }
        }
    }
}
