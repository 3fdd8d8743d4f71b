use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const CONTACT_MAILTO: &str = "mailto:info@palmbeachfabricators.com";
pub const QUOTE_MAILTO: &str = "mailto:info@palmbeachfabricators.com?subject=Quote%20Request";

// Closes the save-search dialog when a response carries
// `HX-Trigger: closeLeadDialog`.
const DIALOG_SCRIPT: &str = r#"
document.body.addEventListener('closeLeadDialog', function () {
  var dialog = document.getElementById('lead-dialog');
  if (dialog && dialog.open) { dialog.close(); }
});
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    let year = chrono::Local::now().year();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Palm Beach Fabricators" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { "Palm Beach Fabricators" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/properties" { "Properties" } }
                            li { a href="/off-market" { "Off-Market Access" } }
                            li { a href="/careers" { "Careers" } }
                            li { a href="/faith-community" { "Faith Community" } }
                        }
                    }
                    a href=(QUOTE_MAILTO) class="btn" { "Get a Quote" }
                }

                (content)

                footer class="site-footer" {
                    p { "© " (year) " Palm Beach Fabricators. All rights reserved." }
                    ul {
                        li { a href="tel:+15616773847" { "(561) 677-3847" } }
                        li { a href=(CONTACT_MAILTO) { "info@palmbeachfabricators.com" } }
                    }
                }

                script { (PreEscaped(DIALOG_SCRIPT)) }
            }
        }
    }
}
