use super::{escape_html, Fragment, GalleryEntry};

/// Full page listing every example
#[derive(Debug, Clone)]
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub server_version: &'a str,
    /// Poll `/reload` on each heartbeat so a restarted server refreshes the page
    pub live_reload: bool,
    pub examples: &'a [GalleryEntry],
}

impl Fragment for IndexPage<'_> {
    fn render(&self) -> String {
        let mut examples = String::new();
        for example in self.examples {
            examples.push_str(&format!(
                r#"<section class="example">
    <h2>{title}</h2>
    <p>{description}</p>
    <div class="component">{component}</div>
</section>
"#,
                title = escape_html(example.title),
                description = escape_html(example.description),
                component = example.component,
            ));
        }

        let live_reload = if self.live_reload {
            format!(
                r#"<div hx-ext="sse" sse-connect="/sse"><div hx-get="/reload?timestamp={version}" hx-trigger="sse:TriggerReload" hx-swap="none"></div></div>"#,
                version = escape_html(self.server_version)
            )
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="server-version" content="{version}">
    <title>{title}</title>
    <link rel="stylesheet" href="/styles/output.css">
    <script src="https://unpkg.com/htmx.org@1.9.12"></script>
    <script src="https://unpkg.com/htmx.org@1.9.12/dist/ext/sse.js"></script>
    <script src="https://unpkg.com/htmx.org@1.9.12/dist/ext/ws.js"></script>
    <script src="https://unpkg.com/hyperscript.org@0.9.12"></script>
</head>
<body>
    <h1>{title}</h1>
    {live_reload}
    <main>
{examples}    </main>
</body>
</html>"#,
            title = escape_html(self.title),
            version = escape_html(self.server_version),
            live_reload = live_reload,
            examples = examples,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<GalleryEntry> {
        vec![GalleryEntry {
            title: "get on load",
            description: "Fetches a message",
            component: r#"<div hx-get="/get"></div>"#.to_string(),
        }]
    }

    #[test]
    fn test_live_reload_only_in_dev() {
        let examples = entries();
        let page = IndexPage {
            title: "Hello, HTMX!",
            server_version: "1700000000",
            live_reload: false,
            examples: &examples,
        };
        assert!(!page.render().contains("/reload?timestamp="));

        let page = IndexPage {
            live_reload: true,
            ..page
        };
        assert!(page.render().contains("/reload?timestamp=1700000000"));
    }

    #[test]
    fn test_components_embedded_verbatim() {
        let examples = entries();
        let html = IndexPage {
            title: "Hello, HTMX!",
            server_version: "1",
            live_reload: false,
            examples: &examples,
        }
        .render();
        assert!(html.contains(r#"<div hx-get="/get"></div>"#));
        assert!(html.contains("Hello, HTMX!"));
    }
}
