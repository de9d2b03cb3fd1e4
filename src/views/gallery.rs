use super::{ClickToLoadTable, ColorBox, Fragment, ModalButton};
use crate::store::ColorPalette;

/// One example on the index page
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub component: String,
}

impl GalleryEntry {
    fn new(title: &'static str, description: &'static str, component: impl Fragment) -> Self {
        Self {
            title,
            description,
            component: component.render(),
        }
    }

    fn raw(title: &'static str, description: &'static str, component: &str) -> Self {
        Self {
            title,
            description,
            component: component.to_string(),
        }
    }
}

/// Render every example once, at startup.
pub fn build_gallery(palette: &ColorPalette) -> Vec<GalleryEntry> {
    let color = |trigger: &str, animate: bool| ColorBox {
        color: palette.next(None).to_string(),
        trigger: trigger.to_string(),
        animate,
    };

    vec![
        GalleryEntry::new(
            "mouseover",
            "The box will fetch a new color from the server when you hover it",
            color("mouseenter", false),
        ),
        GalleryEntry::new(
            "every 1s",
            "The box will fetch a new color from the server every second",
            color("every 1s", false),
        ),
        GalleryEntry::new(
            "every 1s with fade",
            "The box will fetch a new color from the server and fade it in using CSS transitions",
            color("every 1s", true),
        ),
        GalleryEntry::raw(
            "get on load",
            "Fetches a new message from the server when the page loads",
            r#"<div hx-get="/get" hx-trigger="load">Loading...</div>"#,
        ),
        GalleryEntry::raw(
            "get after delay",
            "Fetches a new message from the server when the page loads after a 2 second delay",
            r#"<div hx-get="/get" hx-trigger="load delay:2s">Waiting...</div>"#,
        ),
        GalleryEntry::raw(
            "click to edit",
            "Sends form to the backend directly when click the Submit button and returns the server state",
            r#"<div hx-get="/contacts/1" hx-trigger="load" hx-swap="outerHTML">Loading contact...</div>"#,
        ),
        GalleryEntry::raw(
            "hx-indicator",
            "Uses the 'hx-indicator' attribute to show a loading indicator and the 'hx-disabled-elt' attribute to disable the button while the request is in flight",
            r##"<button hx-get="/get" hx-target="#indicator-result" hx-indicator="#indicator-spinner" hx-disabled-elt="this" class="btn">Fetch</button>
<span id="indicator-spinner" class="htmx-indicator">Loading...</span>
<span id="indicator-result"></span>"##,
        ),
        GalleryEntry::new(
            "click to load",
            "Click the button to load more rows from the server",
            ClickToLoadTable,
        ),
        GalleryEntry::new(
            "open modal",
            "Will open a modal when you click the button",
            ModalButton,
        ),
        GalleryEntry::raw(
            "server-sent events",
            "Shows every heartbeat pushed by the server over an event stream",
            r#"<div hx-ext="sse" sse-connect="/sse" sse-swap="TriggerReload">Waiting for heartbeat...</div>"#,
        ),
        GalleryEntry::raw(
            "websocket chat",
            "Messages sent from any open tab are broadcast to every connected tab",
            r#"<div hx-ext="ws" ws-connect="/ws">
    <div id="messages"></div>
    <div id="messages2" class="text-sm text-gray-500"></div>
    <form ws-send><input name="chat_message" autocomplete="off" class="input"></form>
</div>"#,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_entries() {
        let entries = build_gallery(&ColorPalette::default());
        assert_eq!(entries.len(), 11);
        assert!(entries.iter().all(|e| !e.component.is_empty()));
        assert!(entries[0].component.contains("bg-gray-100"));
        assert!(entries[2].component.contains("transition-colors"));
    }
}
