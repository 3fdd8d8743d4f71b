use maud::{html, Markup, PreEscaped, DOCTYPE};

const ERROR_STYLE: &str = r#"
body {
  font-family: system-ui, sans-serif;
  max-width: 720px;
  margin: 4rem auto;
  padding: 1rem;
}
h1 { font-size: 2rem; margin-bottom: 1rem; }
p { font-size: 1.1rem; color: #444; }
"#;

/// Basic standalone error page
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style { (PreEscaped(ERROR_STYLE)) }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}
